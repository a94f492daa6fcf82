//! Package applier - extracts package tarballs

use anyhow::{Context, Result, bail};
use flate2::read::GzDecoder;
use log::debug;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use tar::Archive;

use applier::{Package, PackageApplier};

/// Installs a package by extracting its gzipped tarball into
/// `{base_dir}/packages/{name}`.
///
/// Like jobs, re-applying replaces the installed tree wholesale.
pub struct TarballPackageApplier {
    packages_dir: PathBuf,
}

impl TarballPackageApplier {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            packages_dir: base_dir.join("packages"),
        }
    }

    fn install_dir(&self, package: &Package) -> PathBuf {
        self.packages_dir.join(&package.name)
    }
}

impl PackageApplier for TarballPackageApplier {
    fn apply(&self, package: &Package) -> Result<()> {
        if !package.source.is_file() {
            bail!("package archive not found: {}", package.source.display());
        }

        let target = self.install_dir(package);
        if target.exists() {
            fs::remove_dir_all(&target).with_context(|| {
                format!("Could not remove old package at {}", target.display())
            })?;
        }
        fs::create_dir_all(&target)
            .with_context(|| format!("Could not create {}", target.display()))?;

        let file = File::open(&package.source)
            .with_context(|| format!("Could not open {}", package.source.display()))?;
        let mut archive = Archive::new(GzDecoder::new(file));
        archive
            .unpack(&target)
            .with_context(|| format!("Could not extract package '{}'", package.name))?;

        debug!("installed package '{}/{}'", package.name, package.version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    /// Build a minimal .tgz with a single file entry.
    fn write_tarball(path: &Path, entry_name: &str, contents: &[u8]) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        {
            let mut builder = tar::Builder::new(&mut encoder);
            let mut header = tar::Header::new_gnu();
            header.set_size(contents.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, entry_name, contents).unwrap();
            builder.finish().unwrap();
        }
        let data = encoder.finish().unwrap();
        fs::write(path, data).unwrap();
    }

    fn tarball_package(dir: &Path, name: &str) -> Package {
        let source = dir.join(format!("{name}.tgz"));
        write_tarball(&source, "bin/tool", b"#!/bin/sh\n");

        Package {
            name: name.to_string(),
            version: "2.1".to_string(),
            source,
        }
    }

    #[test]
    fn extracts_tarball_into_packages_dir() {
        let dir = tempfile::tempdir().unwrap();
        let package = tarball_package(dir.path(), "nginx");
        let applier = TarballPackageApplier::new(dir.path());

        applier.apply(&package).unwrap();

        assert!(dir.path().join("packages/nginx/bin/tool").is_file());
    }

    #[test]
    fn reapply_replaces_previous_install() {
        let dir = tempfile::tempdir().unwrap();
        let package = tarball_package(dir.path(), "nginx");
        let applier = TarballPackageApplier::new(dir.path());

        applier.apply(&package).unwrap();

        let stale = dir.path().join("packages/nginx/stale.txt");
        fs::write(&stale, "old").unwrap();

        applier.apply(&package).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn missing_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let package = Package {
            name: "ghost".to_string(),
            version: "1".to_string(),
            source: dir.path().join("nope.tgz"),
        };
        let applier = TarballPackageApplier::new(dir.path());

        let err = applier.apply(&package).unwrap_err();
        assert!(err.to_string().contains("package archive not found"));
    }

    #[test]
    fn corrupt_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.tgz");
        fs::write(&source, b"not a gzip stream").unwrap();

        let package = Package {
            name: "bad".to_string(),
            version: "1".to_string(),
            source,
        };
        let applier = TarballPackageApplier::new(dir.path());

        let err = applier.apply(&package).unwrap_err();
        assert!(err.to_string().contains("Could not extract package 'bad'"));
    }
}
