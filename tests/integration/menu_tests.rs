//! Full menu sessions

use library_catalog::cli::Menu;

use crate::open_library;

fn session(dir: &std::path::Path, script: &str) -> String {
    let mut library = open_library(dir);
    let mut menu = Menu::new(script.as_bytes(), Vec::new());
    menu.run(&mut library).expect("Session failed");
    String::from_utf8(menu.into_output()).expect("Output is not UTF-8")
}

#[test]
fn test_lending_session() {
    let dir = tempfile::tempdir().unwrap();
    let script = "\
1\nu1\nAlice\n\
2\nDune\nHerbert\nSci-Fi\n111\n2\n\
4\nDune\nu1\n\
3\n\
5\nDune\nu1\n\
5\nDune\nu1\n\
7\n";

    let out = session(dir.path(), script);
    assert!(out.contains("User 'Alice' added successfully."));
    assert!(out.contains("Book 'Dune' added successfully."));
    assert!(out.contains("Alice borrowed 'Dune'."));
    assert!(out.contains("\nAvailable Books:\nDune by Herbert | Subject: Sci-Fi | ISBN: 111 | Quantity: 1\n"));
    assert!(out.contains("Alice returned 'Dune'."));
    assert!(out.contains("This book was not borrowed by this user!"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_refusals_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let script = "\
1\nu1\nAlice\n\
1\nu1\nMallory\n\
4\nDune\nghost\n\
4\nDune\nu1\n\
7\n";

    let out = session(dir.path(), script);
    assert!(out.contains("User ID already exists!"));
    assert!(out.contains("User not found! Please register first."));
    assert!(out.contains("Book not available or out of stock!"));
}

#[test]
fn test_history_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    session(
        dir.path(),
        "1\nu1\nAlice\n2\nEmma\nAusten\nNovel\n222\n1\n4\nemma\nu1\n7\n",
    );

    let out = session(dir.path(), "6\n7\n");
    assert!(out.contains("\nTransaction History:\n"));
    assert!(out.contains(" - Alice (u1) borrowed 'emma'\n"));
}
