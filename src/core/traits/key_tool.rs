use crate::core::errors::Result;
use crate::core::models::tool_output::ToolOutput;

/// Port for the external key-management tool (e.g. `gpg`).
///
/// Implementations live in `adapters::gpg`. The exporter only depends on
/// this trait, never on process spawning.
pub trait KeyTool {
    /// Run the tool with `args` and collect its output.
    ///
    /// Returns `Err` only when the process could not be started; a non-zero
    /// exit is reported through `ToolOutput::success`.
    fn run(&self, args: &[&str]) -> Result<ToolOutput>;

    /// Name of the program, for error messages.
    fn program(&self) -> &str;
}
