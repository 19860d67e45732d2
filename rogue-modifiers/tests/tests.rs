mod consumable_test;
mod dispatch_test;
