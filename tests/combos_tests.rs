use schedule_builder::algorithm::enumerate_combinations;
use schedule_builder::models::{Candidate, CandidateGroup, CourseRequest, Section};

fn sec(subj: &str, crse: &str, crn: i64) -> Section {
    Section {
        subj: subj.to_string(),
        crse: crse.to_string(),
        title: format!("{} {}", subj, crse),
        creds: "3".to_string(),
        crn,
        avail: "10".to_string(),
        max: "30".to_string(),
        time: "TBA".to_string(),
        day: String::new(),
        location: "Room 1".to_string(),
        instructor: "Staff".to_string(),
        notes: String::new(),
    }
}

fn plain(section: Section) -> Candidate {
    Candidate {
        section,
        assoc_sections: Vec::new(),
    }
}

fn group(subj: &str, crse: &str, candidates: Vec<Candidate>) -> CandidateGroup {
    CandidateGroup {
        request: CourseRequest {
            subj: subj.to_string(),
            code: crse.to_string(),
        },
        candidates,
    }
}

#[test]
fn test_empty_group_list_yields_one_empty_combination() {
    let combos = enumerate_combinations(&[]);
    assert_eq!(combos, vec![Vec::<Section>::new()]);
}

#[test]
fn test_output_size_is_product_of_candidate_counts() {
    let g1 = group(
        "CS",
        "1210",
        vec![plain(sec("CS", "1210", 100)), plain(sec("CS", "1210", 101))],
    );
    let g2 = group(
        "MATH",
        "1234",
        vec![
            plain(sec("MATH", "1234", 200)),
            plain(sec("MATH", "1234", 201)),
            plain(sec("MATH", "1234", 202)),
        ],
    );
    let combos = enumerate_combinations(&[g1, g2]);
    assert_eq!(combos.len(), 6);
    // no associated sections anywhere: one entry per course
    assert!(combos.iter().all(|c| c.len() == 2));
}

#[test]
fn test_candidate_with_k_assoc_sections_contributes_k_units() {
    let lecture = sec("BIO", "1400", 300);
    let labs = vec![sec("BIO", "1400", 301), sec("BIO", "1400", 302)];
    let g = group(
        "BIO",
        "1400",
        vec![Candidate {
            section: lecture.clone(),
            assoc_sections: labs.clone(),
        }],
    );
    let combos = enumerate_combinations(&[g]);
    // one lecture with two labs: two combinations, lecture + one lab each
    assert_eq!(combos.len(), 2);
    for (combo, lab) in combos.iter().zip(&labs) {
        assert_eq!(combo.len(), 2);
        assert_eq!(combo[0], lecture);
        assert_eq!(&combo[1], lab);
    }
}

#[test]
fn test_mixed_groups_combination_length_bounds() {
    let with_lab = group(
        "BIO",
        "1400",
        vec![Candidate {
            section: sec("BIO", "1400", 300),
            assoc_sections: vec![sec("BIO", "1400", 301)],
        }],
    );
    let without = group("CS", "1210", vec![plain(sec("CS", "1210", 100))]);
    let combos = enumerate_combinations(&[with_lab, without]);
    // 2 courses, one carrying a lab: every combination has 3 sections
    assert_eq!(combos.len(), 1);
    assert_eq!(combos[0].len(), 3);
}

#[test]
fn test_group_without_candidates_collapses_product() {
    let g1 = group(
        "CS",
        "1210",
        vec![plain(sec("CS", "1210", 100)), plain(sec("CS", "1210", 101))],
    );
    let g2 = group("ART", "9999", Vec::new());
    // a course with no offered sections means no schedule at all, the course
    // is not silently dropped
    assert!(enumerate_combinations(&[g1, g2]).is_empty());
}

#[test]
fn test_deterministic_order_follows_input() {
    let g1 = group(
        "CS",
        "1210",
        vec![plain(sec("CS", "1210", 100)), plain(sec("CS", "1210", 101))],
    );
    let g2 = group(
        "MATH",
        "1234",
        vec![plain(sec("MATH", "1234", 200)), plain(sec("MATH", "1234", 201))],
    );
    let combos = enumerate_combinations(&[g1, g2]);
    let crns: Vec<Vec<i64>> = combos
        .iter()
        .map(|c| c.iter().map(|s| s.crn).collect())
        .collect();
    assert_eq!(
        crns,
        vec![vec![100, 200], vec![100, 201], vec![101, 200], vec![101, 201]]
    );
}
