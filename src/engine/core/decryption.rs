use super::state::{Block, State, Word};

/// Inverse cipher over one block, undoing [`encrypt_block`](super::encrypt_block)
/// step by step in reverse order under the same round keys.
///
/// # Panics
/// If `round_keys` holds fewer than two round keys.
#[inline(always)]
pub fn decrypt_block(ciphertext: &Block, round_keys: &[[Word; 4]]) -> Block {
    let rounds = round_keys.len() - 1;
    let mut state = State::from_block(ciphertext)
        .add_round_key(&round_keys[rounds])
        .transpose()
        .shift_rows_right()
        .inv_sub_bytes();

    for round_key in round_keys[1..rounds].iter().rev() {
        state = state
            .transpose()
            .add_round_key(round_key)
            .inv_mix_columns()
            .transpose()
            .shift_rows_right()
            .inv_sub_bytes();
    }

    state.transpose().add_round_key(&round_keys[0]).to_block()
}
