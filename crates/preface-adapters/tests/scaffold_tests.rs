//! End-to-end scaffolding against the built-in catalog.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use preface_adapters::{FixedReference, LocalFilesystem, MemoryFilesystem, preface_catalog};
use preface_core::{
    application::{ApplicationError, ScaffoldService},
    domain::DomainError,
    error::PrefaceError,
};
use tempfile::TempDir;
use walkdir::WalkDir;

const REFERENCE: &str = "https://cdn.example.com/preface@1.0.0/mod.ts";

const EXPECTED_FILES: [&str; 9] = [
    "README.md",
    "index.html",
    "src/components/Main/controller.ts",
    "src/components/Main/mod.ts",
    "src/components/Main/template.tsx",
    "src/deps.ts",
    "src/index.ts",
    "src/style.ts",
    "tsconfig.json",
];

const EXPECTED_DIRS: [&str; 4] = ["dist", "src", "src/components", "src/components/Main"];

fn local_service() -> ScaffoldService {
    ScaffoldService::new(
        preface_catalog(),
        Box::new(FixedReference::new(REFERENCE)),
        Box::new(LocalFilesystem::new()),
    )
    .unwrap()
}

/// Relative paths of every file and directory below `root`, split by kind.
fn walk(root: &Path) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut files = BTreeSet::new();
    let mut dirs = BTreeSet::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if entry.file_type().is_dir() {
            dirs.insert(rel);
        } else {
            files.insert(rel);
        }
    }

    (files, dirs)
}

#[test]
fn create_produces_complete_workspace() {
    let tmp = TempDir::new().unwrap();
    let root = local_service().create("demo", tmp.path()).unwrap();

    assert_eq!(root, tmp.path().join("demo"));

    let (files, dirs) = walk(&root);
    assert_eq!(files, BTreeSet::from(EXPECTED_FILES.map(String::from)));
    assert_eq!(dirs, BTreeSet::from(EXPECTED_DIRS.map(String::from)));

    assert!(fs::read_dir(root.join("dist")).unwrap().next().is_none());
}

#[test]
fn name_and_reference_are_interpolated() {
    let tmp = TempDir::new().unwrap();
    let root = local_service().create("demo", tmp.path()).unwrap();

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));

    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(html.contains("<title>demo</title>"));

    let deps = fs::read_to_string(root.join("src/deps.ts")).unwrap();
    assert!(deps.contains(&format!("from \"{REFERENCE}\"")));

    for file in EXPECTED_FILES {
        let text = fs::read_to_string(root.join(file)).unwrap();
        assert!(!text.contains("{{"), "{file} has an unrendered placeholder");
    }
}

#[test]
fn reference_appears_only_in_deps() {
    let tmp = TempDir::new().unwrap();
    let root = local_service().create("demo", tmp.path()).unwrap();

    let holders: Vec<&str> = EXPECTED_FILES
        .into_iter()
        .filter(|file| {
            fs::read_to_string(root.join(file))
                .unwrap()
                .contains(REFERENCE)
        })
        .collect();
    assert_eq!(holders, ["src/deps.ts"]);
}

#[test]
fn second_create_never_clobbers() {
    let tmp = TempDir::new().unwrap();
    let service = local_service();
    let root = service.create("demo", tmp.path()).unwrap();

    let readme = root.join("README.md");
    fs::write(&readme, "edited by hand").unwrap();

    let err = service.create("demo", tmp.path()).unwrap_err();
    assert!(matches!(
        err,
        PrefaceError::Application(ApplicationError::WorkspaceAlreadyExists { .. })
    ));
    assert_eq!(fs::read_to_string(readme).unwrap(), "edited by hand");
}

#[test]
fn existing_plain_file_blocks_create() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("demo"), "not a directory").unwrap();

    let err = local_service().create("demo", tmp.path()).unwrap_err();
    assert!(matches!(
        err,
        PrefaceError::Application(ApplicationError::WorkspaceAlreadyExists { .. })
    ));
    assert_eq!(
        fs::read_to_string(tmp.path().join("demo")).unwrap(),
        "not a directory"
    );
}

#[test]
fn invalid_names_touch_nothing() {
    let tmp = TempDir::new().unwrap();
    let service = local_service();

    for name in ["", "   ", "a/b", "..", ".hidden", "con"] {
        let err = service.create(name, tmp.path()).unwrap_err();
        assert!(
            matches!(
                err,
                PrefaceError::Domain(DomainError::InvalidProjectName { .. })
            ),
            "{name:?} gave {err:?}"
        );
    }

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn bad_reference_is_configuration_error_before_io() {
    let tmp = TempDir::new().unwrap();
    let service = ScaffoldService::new(
        preface_catalog(),
        Box::new(FixedReference::new("has space")),
        Box::new(LocalFilesystem::new()),
    )
    .unwrap();

    let err = service.create("demo", tmp.path()).unwrap_err();
    assert!(matches!(err, PrefaceError::Configuration { .. }));
    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn distinct_names_are_independent() {
    let tmp = TempDir::new().unwrap();
    let service = local_service();

    let a = service.create("alpha", tmp.path()).unwrap();
    let b = service.create("beta", tmp.path()).unwrap();

    assert_eq!(walk(&a), walk(&b));
    assert!(
        fs::read_to_string(b.join("README.md"))
            .unwrap()
            .starts_with("# beta")
    );
}

#[test]
fn concurrent_same_name_has_one_winner() {
    let tmp = TempDir::new().unwrap();
    let service = local_service();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| service.create("race", tmp.path())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(
            result,
            Err(PrefaceError::Application(
                ApplicationError::WorkspaceAlreadyExists { .. }
            ))
        ));
    }

    let (files, _) = walk(&tmp.path().join("race"));
    assert_eq!(files.len(), EXPECTED_FILES.len());
}

#[test]
fn failed_write_rolls_back_in_memory() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to("out/demo/src/components/Main/template.tsx");

    let service = ScaffoldService::new(
        preface_catalog(),
        Box::new(FixedReference::new(REFERENCE)),
        Box::new(fs.clone()),
    )
    .unwrap();

    let err = service.create("demo", "out").unwrap_err();
    assert!(matches!(
        err,
        PrefaceError::Application(ApplicationError::IoFailure { .. })
    ));
    assert!(fs.list_files().is_empty());
    assert!(
        fs.list_directories()
            .iter()
            .all(|d| !d.starts_with(PathBuf::from("out/demo")))
    );
}

#[test]
fn memory_and_local_agree() {
    let tmp = TempDir::new().unwrap();
    let root = local_service().create("demo", tmp.path()).unwrap();

    let memory = MemoryFilesystem::new();
    ScaffoldService::new(
        preface_catalog(),
        Box::new(FixedReference::new(REFERENCE)),
        Box::new(memory.clone()),
    )
    .unwrap()
    .create("demo", "mem")
    .unwrap();

    for file in EXPECTED_FILES {
        let on_disk = fs::read_to_string(root.join(file)).unwrap();
        let in_memory = memory
            .read_file(&Path::new("mem/demo").join(file))
            .unwrap();
        assert_eq!(on_disk, in_memory, "{file}");
    }
}
