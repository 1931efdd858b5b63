/// Creates a single [`ChatMessage`](crate::ChatMessage) from a sender shorthand.
///
/// ```rust
/// use parley::{Sender, chat_msg};
///
/// let message = chat_msg!(bot "m-1" => "Done.");
/// assert_eq!(message.sender, Sender::Bot);
/// assert_eq!(message.text, "Done.");
/// ```
#[macro_export]
macro_rules! chat_msg {
    (user $id:expr => $text:expr $(,)?) => {
        $crate::ChatMessage::user($id, $text)
    };
    (bot $id:expr => $text:expr $(,)?) => {
        $crate::ChatMessage::bot($id, $text)
    };
    ($sender:ident $id:expr => $text:expr $(,)?) => {
        compile_error!("unsupported sender: use user or bot");
    };
}

/// Creates a `Vec<ChatMessage>` from sender/id/text triples.
///
/// ```rust
/// use parley::{Sender, chat_messages};
///
/// let messages = chat_messages![
///     user "1" => "Is the order shipped?",
///     bot "2" => "It left the warehouse today.",
/// ];
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[1].sender, Sender::Bot);
/// ```
#[macro_export]
macro_rules! chat_messages {
    () => {
        Vec::<$crate::ChatMessage>::new()
    };
    ($($sender:ident $id:expr => $text:expr),+ $(,)?) => {
        vec![$($crate::chat_msg!($sender $id => $text)),+]
    };
}
