use assert_cmd::Command;

pub fn jsdoc_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jsdoc").unwrap();
    cmd.env_remove("JSDOC_CONFIG");
    cmd
}
