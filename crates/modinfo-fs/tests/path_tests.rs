use modinfo_fs::NormalizedPath;
use rstest::rstest;

#[rstest]
#[case("SQL/Units.sql", "SQL/Units.sql")]
#[case("SQL\\Units.sql", "SQL/Units.sql")]
#[case("Art/UI\\Icons.xml", "Art/UI/Icons.xml")]
fn test_normalize_separators(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_resolve_relative_reference() {
    let base = NormalizedPath::new("mods/VoxDeorum");
    let resolved = base.resolve("XML\\Text.xml");
    assert_eq!(resolved.as_str(), "mods/VoxDeorum/XML/Text.xml");
}

#[test]
fn test_resolve_onto_current_dir_drops_dot() {
    let base = NormalizedPath::new(".");
    assert_eq!(base.resolve("Lua/Main.lua").as_str(), "Lua/Main.lua");
}

#[test]
fn test_resolve_onto_root() {
    let base = NormalizedPath::new("/");
    assert_eq!(base.resolve("a.sql").as_str(), "/a.sql");
}

#[rstest]
#[case("/opt/shared/Units.sql")]
#[case("//server/share/Units.sql")]
#[case("C:\\Mods\\Units.sql")]
#[case("d:/Mods/Units.sql")]
fn test_resolve_keeps_absolute_reference(#[case] reference: &str) {
    let base = NormalizedPath::new("mods/VoxDeorum");
    let resolved = base.resolve(reference);
    assert!(resolved.is_absolute());
    assert_eq!(resolved, NormalizedPath::new(reference));
}

#[test]
fn test_relative_paths_are_not_absolute() {
    assert!(!NormalizedPath::new("SQL/Units.sql").is_absolute());
    assert!(!NormalizedPath::new("C:relative.sql").is_absolute());
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("mods/VoxDeorum/VoxDeorum.modinfo");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "mods/VoxDeorum");
}

#[test]
fn test_parent_of_root_child() {
    let path = NormalizedPath::new("/VoxDeorum.modinfo");
    assert_eq!(path.parent().unwrap().as_str(), "/");
}

#[test]
fn test_containing_dir_of_bare_file_name() {
    let path = NormalizedPath::new("VoxDeorum.modinfo");
    assert!(path.parent().is_none());
    assert_eq!(path.containing_dir().as_str(), ".");
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("mods/VoxDeorum.modinfo");
    assert_eq!(path.file_name(), Some("VoxDeorum.modinfo"));
    assert_eq!(path.extension(), Some("modinfo"));
}

#[test]
fn test_hidden_file_has_no_extension() {
    let path = NormalizedPath::new("mods/.modinfo");
    assert_eq!(path.extension(), None);
}

#[test]
fn test_exists_false_for_nonexistent() {
    let path = NormalizedPath::new("/nonexistent/path/that/does/not/exist");
    assert!(!path.exists());
    assert!(!path.is_file());
}
