//! size-bounding of the payment history
//!
//! multi-decade low-payment schedules produce thousands of records; the
//! shaped views keep the start and end detail a reader actually wants while
//! bounding response size

use crate::types::PaymentRecord;

/// histories longer than this are down-sampled when the full schedule is
/// requested
pub(crate) const SAMPLING_THRESHOLD: usize = 300;

/// records kept verbatim at each end of a sampled history
const EDGE_RECORDS: usize = 12;

/// middle records sampled between the edges
const MAX_MIDDLE_SAMPLES: usize = 10;

/// records returned when the caller did not ask for the full schedule
const TAIL_RECORDS: usize = 10;

/// final records only, for the default truncated view
pub(crate) fn truncate_history(mut history: Vec<PaymentRecord>) -> Vec<PaymentRecord> {
    let len = history.len();
    if len > TAIL_RECORDS {
        history.split_off(len - TAIL_RECORDS)
    } else {
        history
    }
}

/// full-schedule view: below the threshold the history passes through
/// untouched; above it, the first and last records stay verbatim and the
/// middle is sampled at a fixed stride, with each record after a gap
/// annotated with how many payments were skipped
pub(crate) fn sample_history(history: Vec<PaymentRecord>) -> Vec<PaymentRecord> {
    let len = history.len();
    if len <= SAMPLING_THRESHOLD {
        return history;
    }

    let stride = ((len - 2 * EDGE_RECORDS) / MAX_MIDDLE_SAMPLES).max(1);

    let mut shaped: Vec<PaymentRecord> =
        Vec::with_capacity(2 * EDGE_RECORDS + MAX_MIDDLE_SAMPLES);
    shaped.extend_from_slice(&history[..EDGE_RECORDS]);

    let mut index = EDGE_RECORDS;
    let mut picked = 0;
    while index < len - EDGE_RECORDS && picked < MAX_MIDDLE_SAMPLES {
        shaped.push(history[index].clone());
        picked += 1;
        index += stride;
    }

    shaped.extend_from_slice(&history[len - EDGE_RECORDS..]);
    annotate_gaps(&mut shaped);
    shaped
}

fn annotate_gaps(records: &mut [PaymentRecord]) {
    for i in 1..records.len() {
        let skipped = records[i].payment_number - records[i - 1].payment_number - 1;
        if skipped > 0 {
            records[i].note =
                Some(format!("Showing sample payment (skipped {skipped} payments)"));
        }
    }
}
