use chrono::Utc;
use rand::Rng;
use std::sync::Mutex;

/// 64-character alphabet in ASCII order, so keys sort the same way
/// lexicographically as the timestamps they encode.
const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const RAND_LEN: usize = 12;

struct GenState {
    last_millis: i64,
    last_rand: [u8; RAND_LEN],
}

static STATE: Mutex<GenState> = Mutex::new(GenState {
    last_millis: 0,
    last_rand: [0; RAND_LEN],
});

/// Generate a 20-character child key: 8 chars of millisecond wall clock
/// followed by 12 random chars, all from [`PUSH_CHARS`]. Keys allocated
/// in the same millisecond reuse the previous random tail incremented by
/// one, so a single process never repeats a key and a linear scan of a
/// partition yields entries in creation order.
pub fn next_push_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut state = STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if now == state.last_millis {
        // Increment the tail as a base-64 number, carrying from the end.
        for i in (0..RAND_LEN).rev() {
            if state.last_rand[i] == 63 {
                state.last_rand[i] = 0;
            } else {
                state.last_rand[i] += 1;
                break;
            }
        }
    } else {
        let mut rng = rand::thread_rng();
        for slot in state.last_rand.iter_mut() {
            *slot = rng.gen_range(0..64);
        }
        state.last_millis = now;
    }

    let mut id = Vec::with_capacity(8 + RAND_LEN);
    let mut millis = now;
    for _ in 0..8 {
        id.push(PUSH_CHARS[(millis % 64) as usize]);
        millis /= 64;
    }
    id[..8].reverse();
    for &idx in state.last_rand.iter() {
        id.push(PUSH_CHARS[idx as usize]);
    }

    String::from_utf8(id).expect("push chars are ascii")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_twenty_chars_from_the_alphabet() {
        let id = next_push_id();
        assert_eq!(id.len(), 20);
        assert!(id.bytes().all(|b| PUSH_CHARS.contains(&b)));
    }

    #[test]
    fn keys_are_unique_and_ordered() {
        let mut seen = HashSet::new();
        let mut previous = String::new();
        for _ in 0..10_000 {
            let id = next_push_id();
            assert!(id > previous, "{} should sort after {}", id, previous);
            assert!(seen.insert(id.clone()));
            previous = id;
        }
    }
}
