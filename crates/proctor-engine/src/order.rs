//! The ordering stage: branch sort or anti-collusion branch mixing.

use indexmap::IndexMap;
use proctor_core::{SeatingRules, StudentRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Produce the single ordered sequence the room splitter consumes.
///
/// With `branch_mixing` off this is a stable sort by `(branch,
/// enrollment_no)`, both lexicographic ascending, and the `rng` is
/// never touched. With it on, students are interleaved across branches
/// so neighbours in the sequence (and therefore in consecutive seats)
/// tend to come from different branches.
pub fn arrange<R: Rng>(
    students: Vec<StudentRecord>,
    rules: &SeatingRules,
    rng: &mut R,
) -> Vec<StudentRecord> {
    if rules.branch_mixing {
        mix_branches(students, rng)
    } else {
        sort_by_branch(students)
    }
}

/// Stable sort by branch, tie-broken by enrollment number.
fn sort_by_branch(mut students: Vec<StudentRecord>) -> Vec<StudentRecord> {
    students.sort_by(|a, b| {
        a.branch
            .cmp(&b.branch)
            .then_with(|| a.enrollment_no.cmp(&b.enrollment_no))
    });
    students
}

/// Interleave branches round-robin after shuffling within each branch.
///
/// Groups are keyed in first-encountered order (the `IndexMap`
/// preserves insertion order), each group is Fisher-Yates shuffled
/// independently, and emission takes branch 1's i-th student, branch
/// 2's i-th, and so on, skipping a branch once exhausted. Grouping
/// state is local to this call; nothing survives the return.
fn mix_branches<R: Rng>(students: Vec<StudentRecord>, rng: &mut R) -> Vec<StudentRecord> {
    let total = students.len();
    let mut groups: IndexMap<String, Vec<StudentRecord>> = IndexMap::new();
    for student in students {
        groups
            .entry(student.branch.clone())
            .or_default()
            .push(student);
    }
    for group in groups.values_mut() {
        group.shuffle(rng);
    }

    let longest = groups.values().map(Vec::len).max().unwrap_or(0);
    let mut cursors: Vec<std::vec::IntoIter<StudentRecord>> =
        groups.into_values().map(Vec::into_iter).collect();

    let mut out = Vec::with_capacity(total);
    for _ in 0..longest {
        for cursor in &mut cursors {
            if let Some(student) = cursor.next() {
                out.push(student);
            }
        }
    }
    out
}
