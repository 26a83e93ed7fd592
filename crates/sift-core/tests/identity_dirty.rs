use pretty_assertions::assert_eq;
use sift_core::{
    identity::{fields_assignment, snapshot},
    query::FieldRef,
    schema::{Entity, ModelBuilder},
    stmt::Value,
};

#[derive(Default, Clone)]
struct Profile {
    id: i64,
    name: String,
    tags: Vec<String>,
    settings: serde_json::Value,
}

impl Entity for Profile {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("id", |p| &p.id, |p| &mut p.id).key();
        model.field("name", |p| &p.name, |p| &mut p.name);
        model.field("tags", |p| &p.tags, |p| &mut p.tags);
        model.field("settings", |p| &p.settings, |p| &mut p.settings);
    }
}

fn profile() -> Profile {
    Profile {
        id: 1,
        name: "ada".into(),
        tags: vec!["a".into(), "b".into()],
        settings: serde_json::json!({ "theme": "dark" }),
    }
}

#[test]
fn unchanged_model_has_no_assignments() {
    let profile = profile();
    let before = snapshot(&profile).unwrap();
    let assignment = fields_assignment(&profile, Some(before.clone())).unwrap();

    assert!(assignment.is_empty());
    assert_eq!(assignment.old_values, Some(before));
}

#[test]
fn changed_fields_only() {
    let mut profile = profile();
    let before = snapshot(&profile).unwrap();

    profile.name = "grace".into();
    profile.tags.push("c".into());

    let assignment = fields_assignment(&profile, Some(before)).unwrap();
    let names: Vec<_> = assignment.names().collect();
    assert_eq!(names, ["name", "tags"]);
    assert_eq!(assignment.value("name"), Some(&Value::from("grace")));
    assert_eq!(
        assignment.fields["tags"],
        FieldRef::constant(Value::from(vec!["a", "b", "c"]))
    );
}

#[test]
fn documents_compare_by_content() {
    let mut profile = profile();
    let before = snapshot(&profile).unwrap();

    profile.settings = serde_json::json!({ "theme": "dark" });
    assert!(fields_assignment(&profile, Some(before.clone()))
        .unwrap()
        .is_empty());

    profile.settings["theme"] = "light".into();
    let assignment = fields_assignment(&profile, Some(before)).unwrap();
    assert!(assignment.contains("settings"));
    assert_eq!(assignment.len(), 1);
}

#[test]
fn no_snapshot_assigns_everything() {
    let assignment = fields_assignment(&profile(), None).unwrap();
    assert_eq!(assignment.len(), 4);
    assert_eq!(assignment.old_values, None);
}

#[test]
fn missing_snapshot_entries_count_as_changed() {
    let profile = profile();
    let mut before = snapshot(&profile).unwrap();
    before.shift_remove("name");

    let assignment = fields_assignment(&profile, Some(before)).unwrap();
    let names: Vec<_> = assignment.names().collect();
    assert_eq!(names, ["name"]);
}
