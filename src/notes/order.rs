use super::flatten::MetadataEntry;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Sorts metadata entries into their rendered order.
///
/// Paths listed in `priority_keys` come first, in list order. Everything
/// else follows, compared naturally: digit runs by numeric value, other
/// characters case-insensitively. The comparison is a strict total order;
/// when the folded walk finds no difference, plain byte order of the paths
/// decides, so identical input always renders identically.
pub fn order_entries(entries: &mut [MetadataEntry], priority_keys: &[String]) {
    entries.sort_by(|a, b| compare_paths(&a.path, &b.path, priority_keys));
}

fn compare_paths(a: &str, b: &str, priority_keys: &[String]) -> Ordering {
    let rank_a = priority_keys.iter().position(|key| key == a);
    let rank_b = priority_keys.iter().position(|key| key == b);
    match (rank_a, rank_b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => natural_cmp(a, b),
    }
}

/// Case-insensitive comparison that reads embedded digit runs as numbers,
/// so `alpha2` sorts before `alpha10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut chars_a = a.chars().peekable();
    let mut chars_b = b.chars().peekable();
    loop {
        match (chars_a.peek().copied(), chars_b.peek().copied()) {
            // Folded walk found no difference; byte order keeps this total
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digit_run(&mut chars_a);
                let run_b = take_digit_run(&mut chars_b);
                let ordering = compare_digit_runs(&run_a, &run_b);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                let ordering = x.to_lowercase().cmp(y.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                chars_a.next();
                chars_b.next();
            }
        }
    }
}

fn take_digit_run(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    // Compare by magnitude without parsing, so arbitrarily long runs work
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
