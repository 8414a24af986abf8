use std::path::{Path, PathBuf};

use alfred_core::{FileRules, GENERATED_HEADER, GeneratedFile, package_dir};

use crate::JavaFile;

/// The `<Name>Provider.java` source file of one candidate.
pub struct ProviderJava {
    file: JavaFile,
    class_name: String,
}

impl ProviderJava {
    pub fn new(file: JavaFile) -> Self {
        let class_name = file.spec().name().simple_name().to_string();
        Self { file, class_name }
    }

    /// Path relative to the source root (e.g. `com/example/FooProvider.java`).
    pub fn relative_path(&self) -> PathBuf {
        package_dir(self.file.package()).join(format!("{}.java", self.class_name))
    }
}

impl GeneratedFile for ProviderJava {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        match self.rules().header {
            Some(header) => self.file.render_with_header(header),
            None => self.file.render(),
        }
    }
}
