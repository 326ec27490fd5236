//! ASCII art banner for interactive runs.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    plane: &'static str,
    trail: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    plane: "\x1b[38;2;42;171;238m",    // Telegram blue
    trail: "\x1b[38;2;120;120;140m",   // Gray-blue
    title: "\x1b[1;38;2;255;255;255m", // Bold white
    subtitle: "\x1b[38;2;150;150;150m",
    reset: "\x1b[0m",
};

/// Prints the banner to stdout. Nothing is printed when stdout is not a terminal.
pub fn print_banner() {
    if !std::io::stdout().is_terminal() {
        return;
    }

    let c = &COLOR;
    let pl = c.plane;
    let tr = c.trail;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{pl}        ▄▄▄▀▀▀█{r}
{tr}  ─ ─ {pl}▄▀▀  ▄▀ ▄▀{r}     {tt}  tgvercel{r}
{tr} ─ ─ {pl}▀▀▄▄▀  ▄▀{r}      {st}  telegram bots on vercel{r}
{pl}        ▀▄▄▀{r}
"#
    );
}
