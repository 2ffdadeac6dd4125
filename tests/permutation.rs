use std::collections::HashSet;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn permutation(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_permutation"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut input = child.stdin.take().unwrap();
        if let Some(s) = stdin {
            input.write_all(s.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn lines(o: &Output) -> Vec<String> {
    String::from_utf8(o.stdout.clone())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

fn assert_subset(out: &[String], k: usize) {
    let input: HashSet<&str> = ["a", "b", "c", "d", "e"].into_iter().collect();
    let seen: HashSet<&str> = out.iter().map(String::as_str).collect();

    assert_eq!(k, out.len());
    assert_eq!(k, seen.len());
    assert!(seen.is_subset(&input));
}

#[test]
fn tokens_from_arguments() {
    let o = permutation(&["3", "a", "b", "c", "d", "e"], None);

    assert!(o.status.success());
    assert_subset(&lines(&o), 3);
}

#[test]
fn tokens_from_stdin() {
    let o = permutation(&["3"], Some("a b\nc d\te\n"));

    assert!(o.status.success());
    assert_subset(&lines(&o), 3);
}

#[test]
fn deque_backend() {
    let o = permutation(&["--deque", "--seed", "4", "5", "a", "b", "c", "d", "e"], None);

    assert!(o.status.success());
    assert_subset(&lines(&o), 5);
}

#[test]
fn seeded_runs_repeat() {
    let args = ["--seed", "12", "4", "a", "b", "c", "d", "e"];
    let a = permutation(&args, None);
    let b = permutation(&args, None);

    assert_eq!(lines(&a), lines(&b));
}

#[test]
fn too_many_fails() {
    let o = permutation(&["6", "a", "b", "c", "d", "e"], None);

    assert!(!o.status.success());
    assert!(o.stdout.is_empty());
    assert!(String::from_utf8_lossy(&o.stderr).contains("invalid argument"));
}

#[test]
fn bad_count_fails() {
    let o = permutation(&["many", "a"], None);

    assert!(!o.status.success());
}
