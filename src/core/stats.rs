use super::note::Note;

/// Count notes per creation date. Pairs come out in first-seen order, not
/// chronological order. Pure derivation, recomputed on every render.
pub fn notes_per_day(notes: &[Note]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for note in notes {
        let day = note.created.format("%Y-%m-%d").to_string();
        match counts.iter_mut().find(|(d, _)| *d == day) {
            Some((_, count)) => *count += 1,
            None => counts.push((day, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn note_on(id: i64, date: (i32, u32, u32)) -> Note {
        let mut note = Note::new(id);
        note.created = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        note
    }

    #[test]
    fn empty_collection_has_no_buckets() {
        assert!(notes_per_day(&[]).is_empty());
    }

    #[test]
    fn same_day_notes_share_a_bucket() {
        let notes = vec![
            note_on(1, (2026, 8, 1)),
            note_on(2, (2026, 8, 1)),
            note_on(3, (2026, 8, 2)),
        ];
        let counts = notes_per_day(&notes);
        assert_eq!(
            counts,
            vec![("2026-08-01".to_string(), 2), ("2026-08-02".to_string(), 1)]
        );
    }

    #[test]
    fn counts_sum_to_collection_size() {
        let notes = vec![
            note_on(1, (2026, 7, 30)),
            note_on(2, (2026, 8, 1)),
            note_on(3, (2026, 7, 30)),
            note_on(4, (2026, 8, 2)),
        ];
        let counts = notes_per_day(&notes);
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, notes.len());
    }

    #[test]
    fn buckets_come_out_in_first_seen_order() {
        let notes = vec![
            note_on(1, (2026, 8, 2)),
            note_on(2, (2026, 8, 1)),
            note_on(3, (2026, 8, 2)),
        ];
        let counts = notes_per_day(&notes);
        assert_eq!(counts[0].0, "2026-08-02");
        assert_eq!(counts[1].0, "2026-08-01");
    }
}
