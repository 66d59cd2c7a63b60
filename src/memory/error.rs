use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RememberError {
    /// The requested cursor is below zero (`position: None`), past the end,
    /// or the history is empty.
    #[error("{}", cursor_message(.position, .length))]
    InvalidCursor {
        position: Option<usize>,
        length: usize,
    },
}

pub type Result<T> = std::result::Result<T, RememberError>;

fn cursor_message(position: &Option<usize>, length: &usize) -> String {
    match (position, length) {
        (_, 0) => "Cursor cannot be set when length is zero".to_string(),
        (Some(position), length) => format!(
            "Invalid cursor {position}: must be zero or greater, and less than length {length}"
        ),
        (None, length) => format!(
            "Invalid cursor below zero: must be zero or greater, and less than length {length}"
        ),
    }
}
