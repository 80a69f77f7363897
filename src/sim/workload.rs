//! Plain-text workload files: one process per line,
//! `pid arrival burst priority`.

use std::fmt::Write as _;

use crate::{
    core::{Pid, Priority, ProcessDescriptor, Ticks},
    error::{Result, SchedError},
};

/// Reads at most `limit` records (all of them if `None`). Lines past the
/// limit are never looked at.
pub fn parse_workload(input: &str, limit: Option<usize>) -> Result<Vec<ProcessDescriptor>> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut descriptors = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if descriptors.len() >= limit {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        descriptors.try_reserve(1)?;
        descriptors.push(parse_record(index + 1, trimmed)?);
    }

    Ok(descriptors)
}

fn parse_record(line: usize, text: &str) -> Result<ProcessDescriptor> {
    let malformed = || SchedError::MalformedRecord {
        line,
        content: text.to_owned(),
    };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let [pid, arrival, burst, priority] = fields.as_slice() else {
        return Err(malformed());
    };

    let pid: Pid = pid.parse().map_err(|_| malformed())?;
    let arrival: i64 = arrival.parse().map_err(|_| malformed())?;
    let burst: i64 = burst.parse().map_err(|_| malformed())?;
    let priority: Priority = priority.parse().map_err(|_| malformed())?;

    let invalid = |reason: String| SchedError::InvalidDescriptor { pid, reason };
    let arrival = Ticks::try_from(arrival)
        .map_err(|_| invalid(format!("arrival time {arrival} is negative")))?;
    let burst = match Ticks::try_from(burst) {
        Ok(burst) if burst > 0 => burst,
        _ => return Err(invalid(format!("burst time {burst} is not positive"))),
    };

    Ok(ProcessDescriptor::new(pid, arrival, burst, priority))
}

pub fn format_workload(descriptors: &[ProcessDescriptor]) -> String {
    let mut out = String::new();
    for desc in descriptors {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            desc.pid, desc.arrival, desc.burst, desc.priority
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_and_skips_noise() {
        let input = "# pid arrival burst priority\n1 0 5 2\n\n  2 3 4 -1  \n";
        let parsed = parse_workload(input, None).unwrap();
        assert_eq!(
            parsed,
            vec![
                ProcessDescriptor::new(1, 0, 5, 2),
                ProcessDescriptor::new(2, 3, 4, -1),
            ]
        );
    }

    #[test]
    fn short_record_is_malformed() {
        let err = parse_workload("1 0 5 2\n2 3 4\n", None).unwrap_err();
        assert!(matches!(err, SchedError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn non_integer_field_is_malformed() {
        let err = parse_workload("1 0 five 2\n", None).unwrap_err();
        assert!(matches!(err, SchedError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn negative_arrival_is_invalid() {
        let err = parse_workload("3 -1 5 2\n", None).unwrap_err();
        assert!(matches!(err, SchedError::InvalidDescriptor { pid: 3, .. }));
    }

    #[test]
    fn zero_burst_is_invalid() {
        let err = parse_workload("3 1 0 2\n", None).unwrap_err();
        assert!(matches!(err, SchedError::InvalidDescriptor { pid: 3, .. }));
    }

    #[test]
    fn limit_stops_before_later_lines() {
        let parsed = parse_workload("1 0 1 0\n2 0 1 0\nbad\n", Some(2)).unwrap();
        assert_eq!(parsed.iter().map(|d| d.pid).collect::<Vec<_>>(), vec![1, 2]);

        let err = parse_workload("1 0 1 0\n2 0 1 0\nbad\n", None).unwrap_err();
        assert!(matches!(err, SchedError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn limit_skips_comments_when_counting() {
        let parsed = parse_workload("# header\n\n1 0 1 0\n# gap\n2 4 1 0\n3 5 1 0\n", Some(2)).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].pid, 2);
    }

    #[test]
    fn formatted_workload_parses_back() {
        let descs = vec![
            ProcessDescriptor::new(1, 0, 5, 2),
            ProcessDescriptor::new(9, 12, 1, 0),
        ];
        assert_eq!(parse_workload(&format_workload(&descs), None).unwrap(), descs);
    }
}
