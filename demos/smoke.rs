//! Smoke test for acdetector's detector lifecycle and scanning.

use acdetector::Detector;

fn main() {
    println!("Running acdetector smoke tests...\n");

    test_basic_detection();
    test_longest_match_policy();
    test_codepoint_offsets();
    test_lifecycle();

    println!("\nAll smoke tests passed.");
}

fn test_basic_detection() {
    let detector = Detector::new();
    detector.build(&["he", "she", "his", "hers"]).unwrap();

    let matches = detector.scan("ushers");
    assert_eq!(matches.len(), 2);
    assert_eq!((matches[0].start, matches[0].end, matches[0].pattern), (1, 4, 1));
    assert_eq!((matches[1].start, matches[1].end, matches[1].pattern), (2, 6, 3));
    println!("- basic detection");
}

fn test_longest_match_policy() {
    let detector = Detector::new();
    detector.build(&["a", "ab", "b"]).unwrap();

    // One uninterrupted run: only the longest pattern is reported.
    let matches = detector.scan("ab");
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].start, matches[0].end, matches[0].pattern), (0, 2, 1));
    println!("- longest match per run");
}

fn test_codepoint_offsets() {
    let detector = Detector::new();
    detector.build(&["法.轮.功", "红客联盟"]).unwrap();

    let text = "然后法.轮.功 我们的红客联盟 怒哀乐";
    let chars: Vec<char> = text.chars().collect();

    let matches = detector.scan(text);
    assert_eq!(matches.len(), 2);
    for m in &matches {
        let span: String = chars[m.start..m.end].iter().collect();
        println!("  found {:?} at [{}, {})", span, m.start, m.end);
    }
    println!("- codepoint offsets over CJK text");
}

fn test_lifecycle() {
    let detector = Detector::new();
    assert!(detector.scan("anything").is_empty());
    assert!(!detector.is_active());

    detector.build(&["word"]).unwrap();
    assert_eq!(detector.scan("a word").len(), 1);

    detector.clear().unwrap();
    assert!(detector.scan("a word").is_empty());

    // Rebuild after clear works; empty build equals clear.
    detector.build(&["word"]).unwrap();
    detector.build::<&str>(&[]).unwrap();
    assert!(!detector.is_built());

    println!("- lifecycle guard");
}
