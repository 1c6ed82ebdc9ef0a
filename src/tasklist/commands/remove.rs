use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::task_list::TaskList;

/// Removes task `index`, or the last task when no index is given.
pub fn run(list: &mut TaskList, index: Option<&str>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let idx = match index {
        Some(raw) => list.resolve(raw)?,
        None => {
            let Some(last) = list.last_index() else {
                result.add_message(CmdMessage::info("nothing to remove"));
                return Ok(result);
            };
            last
        }
    };

    let removed = list.remove(idx)?;
    result.add_message(CmdMessage::success(format!(
        "Task removed: {}",
        removed.description
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::store::memory::fixtures::{list_of, numbered};

    #[test]
    fn removes_last_without_index() {
        let mut list = list_of(&[("A", false), ("B", false)]);
        let result = run(&mut list, None).unwrap();

        assert_eq!(list, list_of(&[("A", false)]));
        assert_eq!(result.messages[0].content, "Task removed: B");
    }

    #[test]
    fn empty_list_reports_nothing_to_remove() {
        let mut list = TaskList::new();
        let result = run(&mut list, None).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "nothing to remove");
    }

    #[test]
    fn every_valid_index_removes_exactly_that_task() {
        for i in 1..=4 {
            let mut list = numbered(4);
            let mut expected = numbered(4).into_tasks();
            let gone = expected.remove(i - 1);

            let result = run(&mut list, Some(&i.to_string())).unwrap();

            assert_eq!(list.len(), 3);
            assert_eq!(list.into_tasks(), expected);
            assert_eq!(
                result.messages[0].content,
                format!("Task removed: {}", gone.description)
            );
        }
    }

    #[test]
    fn out_of_range_leaves_list_unchanged() {
        let mut list = list_of(&[("A", false)]);
        let err = run(&mut list, Some("5")).unwrap_err();

        assert!(matches!(err, TaskError::Validation(ref m) if m == "invalid task number"));
        assert_eq!(list, list_of(&[("A", false)]));
    }

    #[test]
    fn non_numeric_is_invalid_number() {
        let mut list = numbered(2);
        assert!(run(&mut list, Some("first")).is_err());
        assert_eq!(list.len(), 2);
    }
}
