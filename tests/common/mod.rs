use assert_cmd::Command;

pub fn qrstash_cmd() -> Command {
    let mut cmd = Command::cargo_bin("qrstash").unwrap();
    cmd.env_remove("QRSTASH_ROOT");
    cmd.env_remove("QRSTASH_KEY");
    cmd.env_remove("QRSTASH_LOG");
    cmd
}
