#![allow(dead_code)]

use starbase_sandbox::assert_cmd;
use std::path::Path;

pub fn create_command(path: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("safe-replace").unwrap();
    cmd.current_dir(path);
    cmd.timeout(std::time::Duration::from_secs(60));
    cmd.env("RUST_BACKTRACE", "1");
    cmd.env("NO_COLOR", "1");
    cmd.env("SAFE_REPLACE_LOG", "trace");
    cmd.env("SAFE_REPLACE_TEST", "true");
    cmd.env_remove("SAFE_REPLACE_VERBOSE");
    cmd
}

pub fn get_stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

pub fn create_tar_gz(archive_file: &Path, files: &[(&str, &str)]) {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let file = std::fs::File::create(archive_file).unwrap();
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
