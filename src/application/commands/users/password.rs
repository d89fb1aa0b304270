pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

const COMMON_PASSWORDS: &[&str] = &[
    "123456", "123456789", "12345678", "password", "qwerty", "qwerty123", "1234567890",
    "111111", "abc123", "password1", "iloveyou", "1q2w3e4r", "000000", "qwertyuiop",
    "123123", "letmein", "welcome", "monkey", "dragon", "football", "baseball", "sunshine",
    "princess", "admin", "administrator", "passw0rd", "trustno1", "superman", "starwars",
    "whatever", "master", "shadow", "michael", "charlie", "jennifer", "computer",
    "freedom", "zaq12wsx", "1qaz2wsx", "changeme", "cinema", "movies",
];

/// Every rule the password breaks, in the order the form lists them.
pub(super) fn password_problems(password: &str, username: &str) -> Vec<String> {
    let mut problems = Vec::new();
    let lowered = password.to_lowercase();
    let user = username.trim().to_lowercase();

    if !user.is_empty() && (lowered == user || (user.len() >= 3 && lowered.contains(&user))) {
        problems.push("The password is too similar to the username.".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push(format!(
            "This password is too short. It must contain at least {MIN_PASSWORD_LENGTH} characters."
        ));
    }
    if COMMON_PASSWORDS.contains(&lowered.trim()) {
        problems.push("This password is too common.".to_string());
    }
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.".to_string());
    }
    problems
}
