//! Tolerant normalization of directory rows.
//!
//! Backends disagree on field names, so every logical attribute is
//! resolved through an ordered list of aliases here, at the ingestion
//! boundary, instead of scattering alias lookups through view code.

use serde_json::Value;

use crate::model::User;

fn str_at<'a>(row: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut node = row;
    for key in path {
        node = node.get(key)?;
    }
    node.as_str().filter(|s| !s.trim().is_empty())
}

fn first_str<'a>(row: &'a Value, aliases: &[&[&str]]) -> Option<&'a str> {
    aliases.iter().find_map(|path| str_at(row, path))
}

/// Display name: `displayname` → `displayName` → `firstname lastname`.
fn resolve_name(row: &Value) -> String {
    if let Some(name) = first_str(row, &[&["displayname"], &["displayName"]]) {
        return name.to_string();
    }
    match (str_at(row, &["firstname"]), str_at(row, &["lastname"])) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Email: `email.work` → `customattributes.emails[0].value` → `username`.
fn resolve_email(row: &Value) -> String {
    if let Some(email) = str_at(row, &["email", "work"]) {
        return email.to_string();
    }
    if let Some(email) = row
        .pointer("/customattributes/emails/0/value")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
    {
        return email.to_string();
    }
    str_at(row, &["username"])
        .unwrap_or("Unknown")
        .to_string()
}

/// Normalize one opaque directory row into a canonical [`User`].
/// Total: unknown shapes normalize to placeholder values, never errors.
pub fn normalize_user(row: &Value) -> User {
    let title = first_str(row, &[&["title"], &["customattributes", "title"]]);
    let department = first_str(
        row,
        &[
            &["department"],
            &["customattributes", "enterpriseUser", "department"],
        ],
    );
    User {
        id: first_str(row, &[&["id"], &["userid"], &["empid"]])
            .unwrap_or_default()
            .to_string(),
        name: resolve_name(row),
        email: resolve_email(row),
        emp_id: first_str(row, &[&["empid"], &["employeeId"]])
            .unwrap_or_default()
            .to_string(),
        manager: first_str(row, &[&["manager"], &["managerEmail"]])
            .unwrap_or_default()
            .to_string(),
        store_code: first_str(row, &[&["storecode"], &["storeLocation"]])
            .unwrap_or_default()
            .to_string(),
        brand: first_str(row, &[&["brand"]])
            .or(department)
            .unwrap_or_default()
            .to_string(),
        title: title.map(str::to_string),
        department: department.map(str::to_string),
        start_date: first_str(row, &[&["startdate"], &["startDate"]])
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefers_lowercase_displayname() {
        let row = json!({"displayname": "John Smith", "displayName": "Ignored"});
        assert_eq!(normalize_user(&row).name, "John Smith");
    }

    #[test]
    fn test_falls_back_to_camel_case_then_split_name() {
        let camel = json!({"displayName": "Jane Doe"});
        assert_eq!(normalize_user(&camel).name, "Jane Doe");

        let split = json!({"firstname": "Bob", "lastname": "Johnson"});
        assert_eq!(normalize_user(&split).name, "Bob Johnson");
    }

    #[test]
    fn test_unknown_name_shape() {
        let row = json!({"lastname": "OnlyLast"});
        assert_eq!(normalize_user(&row).name, "Unknown");
    }

    #[test]
    fn test_email_alias_order() {
        let work = json!({
            "email": {"work": "work@example.com"},
            "customattributes": {"emails": [{"value": "custom@example.com"}]},
            "username": "uname@example.com",
        });
        assert_eq!(normalize_user(&work).email, "work@example.com");

        let custom = json!({
            "customattributes": {"emails": [{"value": "custom@example.com"}]},
            "username": "uname@example.com",
        });
        assert_eq!(normalize_user(&custom).email, "custom@example.com");

        let username = json!({"username": "uname@example.com"});
        assert_eq!(normalize_user(&username).email, "uname@example.com");

        let nothing = json!({});
        assert_eq!(normalize_user(&nothing).email, "Unknown");
    }

    #[test]
    fn test_blank_aliases_are_skipped() {
        let row = json!({"displayname": "  ", "displayName": "Jane Doe"});
        assert_eq!(normalize_user(&row).name, "Jane Doe");
    }

    #[test]
    fn test_department_from_enterprise_user() {
        let row = json!({
            "displayname": "Jane Doe",
            "customattributes": {"enterpriseUser": {"department": "Operations"}},
        });
        let user = normalize_user(&row);
        assert_eq!(user.department.as_deref(), Some("Operations"));
        // Brand falls back to department when absent.
        assert_eq!(user.brand, "Operations");
    }
}
