mod builtin;
mod generator;
mod modifier_type;
mod registry;
mod target;

pub use generator::{
    GeneratorContext,
    ModifierTypeGenerator,
};
pub use modifier_type::{
    ModifierFactory,
    ModifierType,
};
pub use registry::{
    ModifierTypeFactory,
    ModifierTypeRegistry,
};
pub use target::ModifierTarget;
