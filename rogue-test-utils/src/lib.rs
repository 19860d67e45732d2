mod collection_assert;
mod combatant;
mod error_assert;
mod modifiers;
mod rng;
mod roster;
mod session;
mod setup;

pub use collection_assert::{
    assert_stack_counts,
    assert_type_ids,
};
pub use combatant::{
    TestCombatant,
    TestMove,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use modifiers::TestModifiers;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng,
};
pub use roster::TestRoster;
pub use session::TestSession;
pub use setup::setup_test_environment;
