//! Kill application: delete from the cursor to a motion target.
//!
//! Same-line kills copy the removed text to the small-delete register before
//! anything changes. The host is asked for a fresh undo group immediately
//! before the deletion, and afterwards the cursor is placed on the earlier
//! endpoint regardless of where the host's own deletion left it.

use crate::host::{EditorHost, LinePosition};

/// Returns the text copied to the register, if the kill stayed on one line.
pub(crate) fn kill_to(host: &mut dyn EditorHost, target: LinePosition) -> Option<String> {
    let current = host.cursor_position();
    if current == target {
        return None;
    }
    let (lo, hi) = if current <= target {
        (current, target)
    } else {
        (target, current)
    };
    let killed = (lo.line == hi.line).then(|| {
        let text: String = host
            .current_line_text()
            .chars()
            .skip(lo.column)
            .take(hi.column - lo.column)
            .collect();
        host.write_clipboard_register(&text);
        text
    });
    host.notify_edit_boundary();
    host.delete_range(current, target);
    host.set_cursor(lo.line, lo.column);
    tracing::trace!(
        target: "actions.kill",
        from_line = ?lo.line,
        from_col = lo.column,
        to_line = ?hi.line,
        to_col = hi.column,
        registered = killed.is_some(),
        "kill"
    );
    killed
}
