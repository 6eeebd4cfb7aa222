//! Color scheme read from the user's config.

use config::CONFIG;
use tokenizing::{Color, ColorScheme};

pub struct Colors;

impl ColorScheme for Colors {
    fn brackets() -> &'static Color {
        &CONFIG.colors.brackets
    }

    fn delimiter() -> &'static Color {
        &CONFIG.colors.delimiter
    }

    fn comment() -> &'static Color {
        &CONFIG.colors.comment
    }

    fn item() -> &'static Color {
        &CONFIG.colors.item
    }

    fn known() -> &'static Color {
        &CONFIG.colors.known
    }

    fn annotation() -> &'static Color {
        &CONFIG.colors.annotation
    }

    fn special() -> &'static Color {
        &CONFIG.colors.special
    }

    fn expr() -> &'static Color {
        &CONFIG.colors.expr
    }
}
