// Distance-with-sequence engine.
//
// Every table cell holds the best edit sequence for its prefixes instead of
// just a cost. Cells are handles into one SequenceArena, so extending the
// neighbouring cell's sequence by one operation is O(1) and only two rows of
// handles are live at a time.

use ripple_core::{
    chars_of, EditOperation, EditSequence, Error, Result, SeqRef, SequenceArena, Strip,
    UniformKind, UniformSequence,
};

/// An optimal edit sequence turning `s` into `t`. Its length is the edit
/// distance.
pub fn edit_sequence(s: &str, t: &str) -> Result<EditSequence> {
    edit_sequence_bounded(s, t, Strip::NONE, None)
}

/// [`edit_sequence`] after stripping the affixes `strip` allows. Positions
/// in the result still refer to the unstripped strings.
pub fn edit_sequence_with(s: &str, t: &str, strip: Strip) -> Result<EditSequence> {
    edit_sequence_bounded(s, t, strip, None)
}

/// [`edit_sequence_with`] that refuses inputs whose stripped table would
/// exceed `max_cells` cells.
pub fn edit_sequence_bounded(
    s: &str,
    t: &str,
    strip: Strip,
    max_cells: Option<usize>,
) -> Result<EditSequence> {
    let mut pair = [s, t];
    let prefix = strip.apply(&mut pair);
    let s = chars_of(pair[0]);
    let t = chars_of(pair[1]);

    if let Some(limit) = max_cells {
        let cells = s.len().saturating_mul(t.len());
        if cells > limit {
            log::warn!(
                "edit_sequence: {}x{} chars needs {} cells, limit is {}",
                s.len(),
                t.len(),
                cells,
                limit
            );
            return Err(Error::InputTooLarge { cells, limit });
        }
    }

    log::debug!(
        "edit_sequence: {}x{} chars after stripping {} prefix chars",
        s.len(),
        t.len(),
        prefix
    );
    let sequence = compute(&s, &t)?;
    if prefix > 0 {
        Ok(sequence.shift(prefix))
    } else {
        Ok(sequence)
    }
}

fn compute(s: &[char], t: &[char]) -> Result<EditSequence> {
    let n = s.len();
    let m = t.len();
    if n == 0 {
        return Ok(EditSequence::Uniform(UniformSequence::new(UniformKind::Insert, t)));
    }
    if m == 0 {
        return Ok(EditSequence::Uniform(UniformSequence::new(UniformKind::Delete, s)));
    }

    let mut arena = SequenceArena::new(s, t);
    // Row 0: build t[..j] from nothing
    let mut prev: Vec<SeqRef> = (0..=m).map(|j| arena.insertions(j)).collect();
    let mut cur = prev.clone();

    for i in 1..=n {
        arena.try_reserve(m)?;
        let s_i = s[i - 1];
        // Column 0: erase s[..i]
        cur[0] = arena.deletions(i);
        for j in 1..=m {
            let t_j = t[j - 1];
            if s_i == t_j {
                cur[j] = prev[j - 1];
                continue;
            }
            let ins = cur[j - 1];
            let del = prev[j];
            let sub = prev[j - 1];
            let (best, op) = if ins.len() <= del.len() && ins.len() <= sub.len() {
                (ins, EditOperation::Insert { pos: j - 1, ch: t_j })
            } else if del.len() <= ins.len() && del.len() <= sub.len() {
                (del, EditOperation::Delete { pos: j, ch: s_i })
            } else {
                (sub, EditOperation::Substitute { pos: j - 1, ch: t_j })
            };
            cur[j] = arena.extend(best, op);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    log::debug!(
        "edit_sequence: distance {}, {} arena nodes",
        prev[m].len(),
        arena.node_count()
    );
    Ok(arena.detach(prev[m]))
}
