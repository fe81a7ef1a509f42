use super::CorrectionMapping;
use crate::checker::tokenizer;
use crate::dataset::{Cell, Column, Dataset};
use rayon::prelude::*;

/// Apply a frozen correction mapping across a dataset, producing a new
/// dataset of identical shape. Every text cell gets one tokenizing pass:
/// each maximal alphabetic run is looked up in the mapping and replaced on
/// an exact, case-sensitive, whole-word match. Replacement text is never
/// re-scanned, so the result is independent of mapping order. Numbers,
/// dates, booleans and empty cells pass through untouched.
pub fn apply(dataset: &Dataset, mapping: &CorrectionMapping) -> Dataset {
    if mapping.is_empty() {
        return dataset.clone();
    }

    let columns = dataset
        .columns()
        .par_iter()
        .map(|column| Column {
            name: column.name.clone(),
            cells: column.cells.iter().map(|cell| rewrite(cell, mapping)).collect(),
        })
        .collect();

    Dataset::with_columns(columns)
}

fn rewrite(cell: &Cell, mapping: &CorrectionMapping) -> Cell {
    match cell {
        Cell::Text(text) => Cell::Text(tokenizer::rewrite_words(text, |word| {
            mapping.get(word).map(str::to_string)
        })),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> CorrectionMapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn dataset(cells: Vec<Cell>) -> Dataset {
        Dataset::new(vec![Column::new("notes", cells)]).unwrap()
    }

    #[test]
    fn test_empty_mapping_is_a_no_op() {
        let data = dataset(vec![Cell::Text("teh cat".into()), Cell::Number(42.0)]);
        assert_eq!(apply(&data, &CorrectionMapping::default()), data);
    }

    #[test]
    fn test_whole_word_safety() {
        let data = dataset(vec![Cell::Text("novel".into())]);
        let corrected = apply(&data, &mapping(&[("nov", "November")]));
        assert_eq!(
            corrected.columns()[0].cells[0],
            Cell::Text("novel".to_string())
        );
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let data = dataset(vec![Cell::Text("teh cat sat on teh mat".into())]);
        let corrected = apply(&data, &mapping(&[("teh", "the")]));
        assert_eq!(
            corrected.columns()[0].cells[0],
            Cell::Text("the cat sat on the mat".to_string())
        );
    }

    #[test]
    fn test_multiple_words_in_one_cell() {
        let data = dataset(vec![Cell::Text("teh wrods arrived".into())]);
        let corrected = apply(&data, &mapping(&[("teh", "the"), ("wrods", "words")]));
        assert_eq!(
            corrected.columns()[0].cells[0],
            Cell::Text("the words arrived".to_string())
        );
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        // "teh" becomes "the" even though "the" is itself mapped; one pass,
        // no chaining, regardless of entry order.
        let data = dataset(vec![Cell::Text("teh thing".into())]);
        let corrected = apply(&data, &mapping(&[("teh", "the"), ("the", "thee")]));
        assert_eq!(
            corrected.columns()[0].cells[0],
            Cell::Text("the thing".to_string())
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let data = dataset(vec![Cell::Text("Teh and teh".into())]);
        let corrected = apply(&data, &mapping(&[("teh", "the")]));
        assert_eq!(
            corrected.columns()[0].cells[0],
            Cell::Text("Teh and the".to_string())
        );
    }

    #[test]
    fn test_non_text_cells_untouched() {
        let data = dataset(vec![
            Cell::Number(42.0),
            Cell::DateTime(45000.5),
            Cell::Bool(false),
            Cell::Empty,
        ]);
        let corrected = apply(&data, &mapping(&[("teh", "the")]));
        assert_eq!(corrected, data);
    }

    #[test]
    fn test_shape_preserved() {
        let data = Dataset::new(vec![
            Column::new("a", vec![Cell::Text("teh".into()), Cell::Empty]),
            Column::new("b", vec![Cell::Number(1.0), Cell::Text("ok".into())]),
        ])
        .unwrap();

        let corrected = apply(&data, &mapping(&[("teh", "the")]));
        assert_eq!(corrected.column_count(), data.column_count());
        assert_eq!(corrected.row_count(), data.row_count());
        let names: Vec<&str> = corrected.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_punctuation_bounded_matches_replaced() {
        let data = dataset(vec![Cell::Text("(teh) teh-cat \"teh\"".into())]);
        let corrected = apply(&data, &mapping(&[("teh", "the")]));
        assert_eq!(
            corrected.columns()[0].cells[0],
            Cell::Text("(the) the-cat \"the\"".to_string())
        );
    }
}
