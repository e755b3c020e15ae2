//! Minimal cookie-header parsing for the anti-forgery token.

/// Extract the value of the cookie named `name` from a `Cookie` header
/// string (`"a=1; b=2"`).
pub(crate) fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
