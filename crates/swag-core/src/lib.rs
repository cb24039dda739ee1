pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

/// Trait for code generators that render an IR spec into a single compilation unit.
pub trait CodeGenerator {
    type Error: std::error::Error;
    fn generate(&self, ir: &ir::IrSpec) -> Result<String, Self::Error>;
}
