#[cfg(test)]
mod queries {
    use proofstep::parsing::{scanner, StatementIndex, UpdateResult};

    // statements at [0, 10), [12, 27), [28, 34), [35, 39)
    const SOURCE: &str = "require A.  lemma x : true.\nproof. qed.   ";

    fn indexed(source: &str) -> StatementIndex {
        let mut index = StatementIndex::new();
        index.update(source, 1);
        index
    }

    #[test]
    fn layout() {
        let index = indexed(SOURCE);
        let extents: Vec<(usize, usize)> = index
            .statements()
            .iter()
            .map(|statement| (statement.start_offset, statement.end_offset))
            .collect();

        assert_eq!(extents, vec![(0, 10), (12, 27), (28, 34), (35, 39)]);
    }

    #[test]
    fn target_matches_scanner() {
        let index = indexed(SOURCE);

        for cursor in 0..=SOURCE.len() + 2 {
            assert_eq!(
                index.get_target_end_offset(cursor),
                scanner::find_target_statement_end_for_cursor(SOURCE, cursor),
                "disagreement at cursor {}",
                cursor
            );
        }
    }

    #[test]
    fn target_in_whitespace_gap() {
        let source = "require import A.   lemma foo : true.";
        let index = indexed(source);

        assert_eq!(index.get_target_end_offset(18), 17);
        assert_eq!(index.get_target_end_offset(0), 17);
        assert_eq!(index.get_target_end_offset(25), 37);
    }

    #[test]
    fn target_before_first_statement() {
        let index = indexed("   \n require A.");
        assert_eq!(index.get_target_end_offset(2), 0);
        assert_eq!(index.get_target_end_offset(5), 15);
    }

    #[test]
    fn statements_up_to() {
        let index = indexed(SOURCE);

        assert!(index
            .get_statements_up_to(9)
            .is_empty());
        assert_eq!(
            index
                .get_statements_up_to(10)
                .len(),
            1
        );
        assert_eq!(index.proved_count(27), 2);
        assert_eq!(index.proved_count(33), 2);
        assert_eq!(index.proved_count(100), 4);

        let last = index
            .last_completed(34)
            .unwrap();
        assert_eq!(last.text, "proof.");
        assert_eq!(index.last_completed(5), None);
    }

    #[test]
    fn statements_in_range() {
        let index = indexed(SOURCE);

        let texts = |start, end| -> Vec<String> {
            index
                .get_statements_in_range(start, end)
                .iter()
                .map(|statement| statement.text.clone())
                .collect()
        };

        assert_eq!(texts(0, 100).len(), 4);
        assert_eq!(texts(0, 27), vec!["require A.", "lemma x : true."]);

        // overlapping at the front: starts before `start`
        assert_eq!(texts(1, 27), vec!["lemma x : true."]);

        // overlapping at the back: ends after `end`
        assert_eq!(texts(0, 26), vec!["require A."]);

        assert!(texts(13, 26).is_empty());
        assert!(texts(20, 10).is_empty());
    }

    #[test]
    fn statement_at_offset() {
        let index = indexed(SOURCE);

        assert_eq!(index.find_statement_index_at_offset(0), Some(0));
        assert_eq!(index.find_statement_index_at_offset(9), Some(0));
        assert_eq!(index.find_statement_index_at_offset(10), None);
        assert_eq!(index.find_statement_index_at_offset(11), None);
        assert_eq!(index.find_statement_index_at_offset(12), Some(1));
        assert_eq!(index.find_statement_index_at_offset(27), None);
        assert_eq!(index.find_statement_index_at_offset(28), Some(2));
        assert_eq!(index.find_statement_index_at_offset(38), Some(3));
        assert_eq!(index.find_statement_index_at_offset(40), None);
    }

    #[test]
    fn idempotent_update() {
        let mut index = StatementIndex::new();
        index.update(SOURCE, 4);
        let before = index
            .statements()
            .to_vec();

        assert_eq!(index.update(SOURCE, 4), UpdateResult::Unchanged);
        assert_eq!(index.statements(), before.as_slice());
    }

    #[test]
    fn editing_the_document() {
        let mut index = StatementIndex::new();
        index.update("require A.", 1);
        assert_eq!(index.len(), 1);

        // typing a partial statement doesn't add one
        index.update("require A. lemma x", 2);
        assert_eq!(index.len(), 1);

        index.update("require A. lemma x : true.", 3);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get_target_end_offset(20), 26);

        index.clear();
        assert_eq!(index.get_target_end_offset(20), 0);
    }
}
