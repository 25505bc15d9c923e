//! Vault audit pipeline: scan, parallel parse, serial reduction.

use crate::scanner;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tracing::instrument;
use vaultpulse_core::prelude::*;
use vaultpulse_graph::{HealthAnalyzer, NoteIndex};
use vaultpulse_parser::parse_note;

/// Runs the health audit for one vault.
pub struct VaultManager {
    config: VaultConfig,
}

impl VaultManager {
    /// Create a new vault manager. The configuration is validated here, so
    /// a constructed manager always points at an existing vault directory.
    pub fn new(config: VaultConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get vault path
    pub fn vault_path(&self) -> &Path {
        &self.config.path
    }

    /// Audit configuration in use
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// List every note file in the vault, sorted by path.
    #[instrument(skip(self), name = "vault_scan")]
    pub fn scan_vault(&self) -> Result<Vec<PathBuf>> {
        scanner::scan_notes(&self.config)
    }

    /// Run the full health audit.
    ///
    /// Every note is read and parsed in its own task; the reduction that
    /// follows is one serial pass over the immutable per-note results.
    /// Nothing is classified before the join point, so orphan decisions
    /// always see the complete set of incoming links. Files that cannot be
    /// read are logged and excluded from the audit entirely.
    #[instrument(skip(self), name = "vault_analyze")]
    pub async fn analyze(&self) -> Result<HealthReport> {
        log::info!("Starting vault audit for: {:?}", self.config.path);

        let files = self.scan_vault()?;
        log::info!("Found {} note files", files.len());

        let tasks: Vec<_> = files
            .into_iter()
            .map(|path| {
                tokio::spawn(async move {
                    match tokio::fs::read_to_string(&path).await {
                        Ok(content) => Some(parse_note(&path, &content)),
                        Err(e) => {
                            log::warn!("Skipping unreadable note {}: {}", path.display(), e);
                            None
                        }
                    }
                })
            })
            .collect();

        let mut notes = Vec::with_capacity(tasks.len());
        for joined in join_all(tasks).await {
            match joined {
                Ok(Some(note)) => notes.push(note),
                Ok(None) => {}
                Err(e) => return Err(Error::other(format!("note task failed: {e}"))),
            }
        }

        let index = NoteIndex::build(notes.iter().map(|note| note.path.clone()));

        let report = HealthAnalyzer::new(&notes, &index)
            .with_stub_threshold(self.config.stub_threshold)
            .analyze();

        log::info!(
            "Audit complete: {} notes, {} findings, severity {}",
            report.total_notes,
            report.issue_count(),
            report.severity
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_note(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn manager_for(root: &Path) -> VaultManager {
        VaultManager::new(VaultConfig::new(root).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn analyzes_a_small_vault_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write_note(
            root,
            "index.md",
            "---\ntitle: index\n---\nStart at [[projects]] or [[missing page]].",
        );
        write_note(
            root,
            "projects.md",
            "---\ntitle: projects\n---\nBack to [[index]]. Plenty of words follow here to stay above tiny thresholds.",
        );
        write_note(root, "floating.md", "no frontmatter and no links");

        let manager = manager_for(root);
        let report = manager.analyze().await.unwrap();

        assert_eq!(report.total_notes, 3);
        assert_eq!(
            report.broken_links[&root.join("index.md")],
            ["missing page".to_string()].into_iter().collect()
        );
        assert_eq!(report.orphaned_notes, vec![root.join("floating.md")]);
        assert_eq!(report.missing_frontmatter, vec![root.join("floating.md")]);
        assert!(report.duplicate_titles.is_empty());
    }

    #[tokio::test]
    async fn stub_threshold_comes_from_the_config() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_note(root, "a.md", "---\nt: a\n---\nSee [[b]]. one two three");
        write_note(root, "b.md", "---\nt: b\n---\nSee [[a]]. one two three four");

        let config = VaultConfig::builder(root).stub_threshold(6).build().unwrap();
        let report = VaultManager::new(config).unwrap().analyze().await.unwrap();

        // link targets count as words: a.md has 5 after the frontmatter
        // strip, b.md has 6 and sits exactly on the threshold
        assert_eq!(report.stubs.len(), 1);
        assert_eq!(report.stubs[0].path, root.join("a.md"));
        assert_eq!(report.stubs[0].word_count, 5);
    }

    #[tokio::test]
    async fn unreadable_notes_are_excluded_everywhere() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_note(root, "good.md", "---\nt: g\n---\nLinks to [[mangled]] stay broken.");
        // invalid UTF-8 makes read_to_string fail without touching permissions
        fs::write(root.join("mangled.md"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let manager = manager_for(root);
        let report = manager.analyze().await.unwrap();

        assert_eq!(report.total_notes, 1);
        // the skipped file is not a link target either
        assert_eq!(
            report.broken_links[&root.join("good.md")],
            ["mangled".to_string()].into_iter().collect()
        );
        assert!(report.orphaned_notes.is_empty());
        assert!(
            !report
                .missing_frontmatter
                .contains(&root.join("mangled.md"))
        );
    }

    #[tokio::test]
    async fn settings_directory_is_invisible_to_the_audit() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_note(root, "only.md", "---\nt: o\n---\nSelf contained [[only]] note.");
        write_note(root, ".obsidian/templates/daily.md", "[[only]] template");

        let manager = manager_for(root);
        let report = manager.analyze().await.unwrap();

        assert_eq!(report.total_notes, 1);
        assert!(report.broken_links.is_empty());
    }

    #[test]
    fn missing_vault_fails_at_construction() {
        let config = VaultConfig {
            path: PathBuf::from("/no/such/vault"),
            note_extension: "md".to_string(),
            settings_dir: ".obsidian".to_string(),
            stub_threshold: 100,
        };
        assert!(matches!(
            VaultManager::new(config),
            Err(err) if err.is_vault_not_found()
        ));
    }

    #[tokio::test]
    async fn repeated_audits_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_note(root, "a.md", "[[b]] and [[nowhere]]");
        write_note(root, "b.md", "quiet");
        write_note(root, "twin/b.md", "other twin");

        let manager = manager_for(root);
        let first = manager.analyze().await.unwrap();
        let second = manager.analyze().await.unwrap();
        assert_eq!(first, second);
    }
}
