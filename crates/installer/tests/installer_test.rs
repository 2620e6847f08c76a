use flate2::write::GzEncoder;
use flate2::Compression;
use safe_replace_core::ReplaceError;
use safe_replace_installer::*;
use starbase_sandbox::create_empty_sandbox;
use std::fs;
use std::path::Path;

fn create_tar_gz(archive_file: &Path, files: &[(&str, &str)]) {
    let file = fs::File::create(archive_file).unwrap();
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));

    for (name, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();

        builder
            .append_data(&mut header, name, contents.as_bytes())
            .unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap();
}

mod extract_archive {
    use super::*;

    #[test]
    fn unpacks_tar_gz() {
        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        create_tar_gz(&archive, &[("app", "v2"), ("docs/README.md", "# app")]);

        extract_archive(&archive, sandbox.path().join("out")).unwrap();

        assert_eq!(
            fs::read_to_string(sandbox.path().join("out/app")).unwrap(),
            "v2"
        );
        assert_eq!(
            fs::read_to_string(sandbox.path().join("out/docs/README.md")).unwrap(),
            "# app"
        );
    }

    #[test]
    fn errors_for_missing_archive() {
        let sandbox = create_empty_sandbox();

        assert!(extract_archive(
            sandbox.path().join("missing.tar.gz"),
            sandbox.path().join("out")
        )
        .is_err());
    }

    #[test]
    fn errors_for_unknown_extension() {
        let sandbox = create_empty_sandbox();
        sandbox.create_file("release.unknown", "not an archive");

        assert!(extract_archive(
            sandbox.path().join("release.unknown"),
            sandbox.path().join("out")
        )
        .is_err());
    }
}

mod update_from_archive {
    use super::*;

    #[test]
    fn replaces_existing_binary() {
        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        sandbox.create_file("bin/app", "v1");
        create_tar_gz(&archive, &[("app", "v2")]);

        let target = sandbox.path().join("bin/app");
        let updated = update_from_archive(&archive, &target, "app", false).unwrap();

        assert!(updated.ends_with("app"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "v2");
        assert!(!sandbox.path().join("bin/app-backup").exists());
        assert!(!sandbox.path().join("bin/.app-update").exists());
    }

    #[test]
    fn finds_binary_in_wrapping_folder() {
        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        sandbox.create_file("bin/app", "v1");
        create_tar_gz(&archive, &[("app-linux/app", "v2"), ("app-linux/LICENSE", "MIT")]);

        update_from_archive(&archive, sandbox.path().join("bin/app"), "app", false).unwrap();

        assert_eq!(
            fs::read_to_string(sandbox.path().join("bin/app")).unwrap(),
            "v2"
        );
    }

    #[test]
    fn installs_missing_binary() {
        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        sandbox.create_file("bin/.keep", "");
        create_tar_gz(&archive, &[("app", "v2")]);

        update_from_archive(&archive, sandbox.path().join("bin/app"), "app", false).unwrap();

        assert_eq!(
            fs::read_to_string(sandbox.path().join("bin/app")).unwrap(),
            "v2"
        );
    }

    #[test]
    fn errors_when_binary_is_missing_from_archive() {
        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        sandbox.create_file("bin/app", "v1");
        create_tar_gz(&archive, &[("other", "v2")]);

        let error =
            update_from_archive(&archive, sandbox.path().join("bin/app"), "app", false).unwrap_err();

        assert!(error.downcast_ref::<InstallerError>().is_some());
        assert_eq!(
            fs::read_to_string(sandbox.path().join("bin/app")).unwrap(),
            "v1"
        );
        assert!(!sandbox.path().join("bin/.app-update").exists());
    }

    #[test]
    fn errors_when_target_dir_is_missing() {
        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        create_tar_gz(&archive, &[("app", "v2")]);

        let error =
            update_from_archive(&archive, sandbox.path().join("bin/app"), "app", false).unwrap_err();

        assert!(error
            .downcast_ref::<ReplaceError>()
            .map(|error| error.is_not_found())
            .or_else(|| error
                .downcast_ref::<safe_replace_core::FileError>()
                .map(|error| error.is_not_found()))
            .unwrap_or_default());
    }

    #[cfg(unix)]
    #[test]
    fn errors_when_target_is_read_only() {
        use std::os::unix::fs::PermissionsExt;

        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        sandbox.create_file("bin/app", "v1");
        create_tar_gz(&archive, &[("app", "v2")]);

        let target = sandbox.path().join("bin/app");

        fs::set_permissions(&target, fs::Permissions::from_mode(0o444)).unwrap();

        // Privileged users can write regardless of mode bits
        if fs::OpenOptions::new().write(true).open(&target).is_ok() {
            return;
        }

        let error = update_from_archive(&archive, &target, "app", false).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<InstallerError>(),
            Some(InstallerError::NotWritable { .. })
        ));
        assert_eq!(fs::read_to_string(&target).unwrap(), "v1");
        assert!(!sandbox.path().join("bin/app-backup").exists());
        assert!(!sandbox.path().join("bin/.app-update").exists());
    }

    #[test]
    fn clears_stale_staging_dir() {
        let sandbox = create_empty_sandbox();
        let archive = sandbox.path().join("release.tar.gz");

        sandbox.create_file("bin/app", "v1");
        sandbox.create_file("bin/.app-update/app", "stale");
        create_tar_gz(&archive, &[("app", "v2")]);

        update_from_archive(&archive, sandbox.path().join("bin/app"), "app", false).unwrap();

        assert_eq!(
            fs::read_to_string(sandbox.path().join("bin/app")).unwrap(),
            "v2"
        );
    }
}

mod staging_dir_for {
    use super::*;

    #[test]
    fn is_a_hidden_sibling() {
        assert_eq!(
            staging_dir_for(Path::new("/usr/local/bin/app"), "app"),
            Path::new("/usr/local/bin/.app-update")
        );
    }
}
