use crossterm::style::Stylize;
use distsplit::presentation::theme::{colors, Icons};
use distsplit::SplitError;

use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let icon = Icons::for_unicode(unicode).error;
    let icon = if color {
        icon.with(colors::ERROR).to_string()
    } else {
        icon.to_string()
    };

    let Some(split) = err.downcast_ref::<SplitError>() else {
        return format!("{} {:#}\n", icon, err);
    };

    let mut out = format!("{} {}\n", icon, split);
    if let Some(hint) = split.hint() {
        let hint = format!("  hint: {}", hint);
        if color {
            out.push_str(&hint.with(colors::DIM).to_string());
        } else {
            out.push_str(&hint);
        }
        out.push('\n');
    }
    out
}

pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    let split = err.downcast_ref::<SplitError>();
    serde_json::json!({
        "event": "error",
        "message": format!("{:#}", err),
        "file": split.and_then(SplitError::file).map(|p| p.display().to_string()),
        "hint": split.and_then(SplitError::hint),
    })
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = crate::ui::json::emit(&error_json(err));
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && std::env::var_os("GITHUB_ACTIONS").is_some() {
        let file = err
            .downcast_ref::<SplitError>()
            .and_then(SplitError::file)
            .map(|p| p.to_string_lossy().into_owned());
        println!("{}", github_error_annotation(&format!("{:#}", err), file.as_deref()));
    }

    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

/// `::error file=...::message` workflow command
fn github_error_annotation(message: &str, file: Option<&str>) -> String {
    let props = file
        .map(|f| format!(" file={},title=distsplit", escape_property(f)))
        .unwrap_or_else(|| " title=distsplit".to_string());
    format!("::error{}::{}", props, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
