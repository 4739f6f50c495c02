use serenity::all::{CreateAllowedMentions, UserId};

/// Allowed mentions that only let `user_id` be pinged.
///
/// Roles, `@everyone` and every other user mentioned in the content stay silent.
pub fn only_mention(user_id: UserId) -> CreateAllowedMentions {
    CreateAllowedMentions::new().users(vec![user_id])
}

/// Escapes the markdown characters `*`, `` ` `` and `_` with a backslash.
///
/// Used for user-controlled text such as usernames interpolated into bot messages.
pub fn escape_markdown(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '*' | '`' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
