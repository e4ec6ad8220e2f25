use poll_editor::{EditorError, EntryList};

/// Edits requested for one option/voter list.
#[derive(Debug, Default)]
pub struct ListEdit<'a> {
    /// When non-empty, the list is rebuilt from these values.
    pub replace: &'a [String],
    pub remove_last: usize,
    pub append: &'a [String],
}

impl ListEdit<'_> {
    /// Apply removals first, then appends.
    pub fn apply(&self, list: &mut EntryList) -> Result<(), EditorError> {
        if !self.replace.is_empty() {
            while list.remove_last().is_some() {}
            return append_all(list, self.replace);
        }
        for _ in 0..self.remove_last {
            list.remove_last();
        }
        append_all(list, self.append)
    }
}

fn append_all(list: &mut EntryList, values: &[String]) -> Result<(), EditorError> {
    for value in values {
        list.add();
        list.set_text(list.len() - 1, value.as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use poll_editor::EntryList;
    use poll_editor::entries::OPTION_PREFIX;
    use pretty_assertions::assert_eq;

    use super::ListEdit;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn replace_drops_existing_entries() {
        let mut list = EntryList::from_joined(OPTION_PREFIX, "Pizza,Sushi");
        let values = strings(&["A", "B"]);
        ListEdit {
            replace: &values,
            ..ListEdit::default()
        }
        .apply(&mut list)
        .expect("edit should apply");
        assert_eq!(list.joined(), "A,B");
    }

    #[test]
    fn replace_on_blank_seed_leaves_no_leading_comma() {
        let mut list = EntryList::new(OPTION_PREFIX);
        let values = strings(&["A"]);
        ListEdit {
            replace: &values,
            ..ListEdit::default()
        }
        .apply(&mut list)
        .expect("edit should apply");
        assert_eq!(list.joined(), "A");
    }

    #[test]
    fn removals_run_before_appends() {
        let mut list = EntryList::from_joined(OPTION_PREFIX, "Pizza,Sushi,Tacos");
        let values = strings(&["Curry"]);
        ListEdit {
            remove_last: 2,
            append: &values,
            ..ListEdit::default()
        }
        .apply(&mut list)
        .expect("edit should apply");
        assert_eq!(list.joined(), "Pizza,Curry");
    }

    #[test]
    fn removing_more_than_present_empties_the_list() {
        let mut list = EntryList::from_joined(OPTION_PREFIX, "Pizza");
        ListEdit {
            remove_last: 3,
            ..ListEdit::default()
        }
        .apply(&mut list)
        .expect("edit should apply");
        assert!(list.is_empty());
    }
}
