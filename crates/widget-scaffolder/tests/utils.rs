use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use widget_scaffolder::{Framework, PackageManager, ProjectContext, TemplateStore};

/// Store shipped in the workspace
pub fn bundled_store() -> TemplateStore {
    TemplateStore::new(TemplateStore::bundled_root())
}

/// Context for a project created at `dir`
pub fn project_at(dir: &Path, framework: Framework) -> ProjectContext {
    ProjectContext {
        project_dir: dir.to_path_buf(),
        project_name: "widget".to_string(),
        scoped_name: "widget".to_string(),
        package_manager: PackageManager::Npm,
        framework,
        no_install: true,
    }
}

/// Every file under `root`, relative to it
pub fn list_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Files the base template for `framework` produces once copied
pub fn base_files(framework: Framework) -> BTreeSet<PathBuf> {
    let base = bundled_store().resolve_base_template(framework).unwrap();
    list_files(&base)
        .into_iter()
        .map(|p| {
            if p == Path::new("_gitignore") {
                PathBuf::from(".gitignore")
            } else {
                p
            }
        })
        .collect()
}

/// Copy the bundled store into `dest` so a test can break it
pub fn writable_store(dest: &Path) -> TemplateStore {
    let src = TemplateStore::bundled_root();
    for entry in WalkDir::new(&src).min_depth(1) {
        let entry = entry.unwrap();
        let target = dest.join(entry.path().strip_prefix(&src).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    TemplateStore::new(dest)
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}
