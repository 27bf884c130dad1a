//! Stylesheet for terminal output

use owo_colors::Style;

/// Colors used by the human renderer. Every style is plain until
/// [`Styles::colorize`] is called.
#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub info: Style,
    /// Field labels under a planned resource
    pub dim: Style,
    pub bold: Style,
    /// Plan and stack file titles
    pub header: Style,
    /// Short type name in the plan listing, e.g. `Subnet`
    pub resource_type: Style,
}

impl Styles {
    /// Switch every style to its ANSI color.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.resource_type = Style::new().magenta();
    }
}
