use super::*;
use crate::prompt::testing::ScriptedConsole;

const TWO_TOOLS: &str = "[TOOLS]\na=cmd1\nb=cmd2\n";

fn config(text: &str) -> Configuration {
    Configuration::parse(text)
}

fn resolve(config: &Configuration, console: &mut ScriptedConsole, file: &str, tool: &str) -> Option<Resolution> {
    Resolver::new(config, console, "ed").resolve(file, tool)
}

fn tool(config: &Configuration, console: &mut ScriptedConsole, tool: &str) -> String {
    Resolver::new(config, console, "ed").resolve_tool(tool)
}

fn resolved(path: &str, command: &str) -> Option<Resolution> {
    Some(Resolution {
        path: path.into(),
        command: command.into(),
    })
}

#[test]
fn test_no_files_prompts_for_path() {
    let config = config(TWO_TOOLS);
    let mut console = ScriptedConsole::answering(&["/tmp/x"]);
    assert_eq!(resolve(&config, &mut console, "", ""), resolved("/tmp/x", "cmd1"));
    assert_eq!(console.transcript, ["> Type a file path: "]);
}

#[test]
fn test_cancelled_path_prompt_resolves_nothing() {
    let config = config(TWO_TOOLS);
    let mut console = ScriptedConsole::answering(&[""]);
    assert_eq!(resolve(&config, &mut console, "", ""), None);

    let mut console = ScriptedConsole::new([None::<&str>]);
    assert_eq!(resolve(&config, &mut console, "", ""), None);
}

#[test]
fn test_no_files_uses_argument_as_path() {
    let config = config(TWO_TOOLS);
    let mut console = ScriptedConsole::default();
    assert_eq!(resolve(&config, &mut console, "a.txt", ""), resolved("a.txt", "cmd1"));
    assert!(console.transcript.is_empty());
}

#[test]
fn test_ask_tool_menu() {
    let config = config(TWO_TOOLS);
    let mut console = ScriptedConsole::answering(&["2", "99", "-99", "", "nano -w"]);
    assert_eq!(tool(&config, &mut console, "ask"), "cmd2");
    assert_eq!(tool(&config, &mut console, "ask"), "cmd2");
    assert_eq!(tool(&config, &mut console, "ask"), "cmd1");
    assert_eq!(tool(&config, &mut console, "ask"), "cmd1");
    assert_eq!(tool(&config, &mut console, "ask"), "nano -w");
}

#[test]
fn test_tool_menu_rendering() {
    let config = config("[TOOLS]\nvim\ncode=code --wait\n");
    let mut console = ScriptedConsole::answering(&["1"]);
    assert_eq!(tool(&config, &mut console, "ask"), "vim");
    insta::assert_snapshot!(console.output(), @r"
       1) vim
       2) code (code --wait)
    > Choose a tool or type a command (default=1):
    ");
}

#[test]
fn test_tool_by_name_default_and_literal() {
    let config = config(TWO_TOOLS);
    let mut console = ScriptedConsole::default();
    assert_eq!(tool(&config, &mut console, ""), "cmd1");
    assert_eq!(tool(&config, &mut console, "b"), "cmd2");
    assert_eq!(tool(&config, &mut console, "emacs -nw"), "emacs -nw");
    assert!(console.transcript.is_empty());
}

#[test]
fn test_no_tools_prompts_with_default_editor() {
    let config = config("");
    let mut console = ScriptedConsole::answering(&["", "micro"]);
    assert_eq!(tool(&config, &mut console, ""), "ed");
    assert_eq!(tool(&config, &mut console, ""), "micro");
    assert_eq!(console.transcript[0], "> Type a command (default=ed): ");

    let mut console = ScriptedConsole::default();
    assert_eq!(tool(&config, &mut console, "kak"), "kak");
}

#[test]
fn test_no_tools_and_empty_default_cancels() {
    let config = config("");
    let mut console = ScriptedConsole::answering(&[""]);
    let mut resolver = Resolver::new(&config, &mut console, "");
    assert_eq!(resolver.resolve("/etc/hosts", ""), None);
}

#[test]
fn test_file_alias_with_bound_tool() {
    let text = "[FILES]\nnotes=$home/notes.txt with vim\n[PATHS]\nhome=/home/u\n[TOOLS]\nvim=vim\n";
    let config = config(text);
    let mut console = ScriptedConsole::default();
    assert_eq!(
        resolve(&config, &mut console, "notes", ""),
        resolved("/home/u/notes.txt", "vim")
    );
}

#[test]
fn test_explicit_tool_overrides_bound_tool() {
    let config = config("[TOOLS]\nvim\nnano\n[FILES]\nnotes=/n with vim\n");
    let mut console = ScriptedConsole::default();
    assert_eq!(resolve(&config, &mut console, "notes", "nano"), resolved("/n", "nano"));
}

#[test]
fn test_unknown_file_is_literal_path_with_default_tool() {
    let config = config("[TOOLS]\nvim\nnano\n[FILES]\nnotes=/n with nano\n");
    let mut console = ScriptedConsole::default();
    assert_eq!(resolve(&config, &mut console, "/etc/fstab", ""), resolved("/etc/fstab", "vim"));
}

#[test]
fn test_file_menu_carries_bound_tool() {
    let config = config("[TOOLS]\nvim\nnano\n[FILES]\nhosts=/etc/hosts\nnotes=/n with nano\n");

    let mut console = ScriptedConsole::answering(&["2"]);
    assert_eq!(resolve(&config, &mut console, "", ""), resolved("/n", "nano"));

    let mut console = ScriptedConsole::answering(&[""]);
    assert_eq!(resolve(&config, &mut console, "ask", ""), resolved("/etc/hosts", "vim"));

    let mut console = ScriptedConsole::answering(&["~/typed.txt"]);
    assert_eq!(resolve(&config, &mut console, "", ""), resolved("~/typed.txt", "vim"));
}

#[test]
fn test_file_menu_rendering() {
    let config = config("[FILES]\nnotes=/home/u/notes.txt\n/etc/hosts\n");
    let mut console = ScriptedConsole::answering(&["-99"]);
    let target = Resolver::new(&config, &mut console, "ed").resolve_file("");
    assert_eq!(target.path, "/home/u/notes.txt");
    insta::assert_snapshot!(console.output(), @r"
       1) notes (/home/u/notes.txt)
       2) /etc/hosts
    > Choose a file or type a path (default=1):
    ");
}

#[test]
fn test_both_menus() {
    let config = config("[TOOLS]\nvim\nnano\n[FILES]\na=/a with vim\nb=/b\n");
    let mut console = ScriptedConsole::answering(&["1", "2"]);
    assert_eq!(resolve(&config, &mut console, "ask", "ask"), resolved("/a", "nano"));
    assert_eq!(console.questions(), 2);
}

#[test]
fn test_default_editor_falls_back_to_vi() {
    let editor = default_editor();
    assert!(!editor.trim().is_empty());
    if std::env::var_os("EDITOR").is_none() {
        assert_eq!(editor, FALLBACK_EDITOR);
    }
}

#[test]
fn test_interrupted_tool_menu_selects_first_tool() {
    let config = config(TWO_TOOLS);
    let mut console = ScriptedConsole::new([None::<&str>]);
    assert_eq!(resolve(&config, &mut console, "/tmp/a", "ask"), resolved("/tmp/a", "cmd1"));
    assert_eq!(console.questions(), 1);
}

#[test]
fn test_interrupted_command_prompt_uses_default_editor() {
    let config = config("");
    let mut console = ScriptedConsole::new([None::<&str>]);
    assert_eq!(resolve(&config, &mut console, "/tmp/a", ""), resolved("/tmp/a", "ed"));
}

#[test]
fn test_interrupted_file_menu_selects_first_file() {
    let config = config("[FILES]\na=/tmp/a\nb=/tmp/b\n[TOOLS]\necho\n");
    let mut console = ScriptedConsole::new([None::<&str>]);
    assert_eq!(resolve(&config, &mut console, "", ""), resolved("/tmp/a", "echo"));
}
