use chrono::{Duration, Utc};
use freewall_api::{validate_message, COMMENTS_TABLE, MAX_MESSAGE_CHARS};
use rand::Rng;

const NUM_TOP_LEVEL: usize = 40;
const NUM_REPLIES: usize = 80;

const MAX_WORDS: usize = 60;
const MAX_LIKES: i64 = 50;
const MAX_AGE_DAYS: i64 = 400;

const IMAGE_RATIO: f64 = 0.1;
const IMAGE_BASE_URL: &str = "https://picsum.photos/seed";

fn gen_n_items(table: &str, n: usize, mut f: impl FnMut(usize) -> String) {
    println!("INSERT INTO {table} (id, created_at, message, image_url, parent_id, likes) VALUES");
    for i in 0..n {
        if i != 0 {
            println!(",");
        }
        print!("    {}", f(i));
    }
    println!();
    println!("ON CONFLICT DO NOTHING;");
}

fn sql_str(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn gen_message(rng: &mut impl Rng) -> String {
    let words = rng.gen_range(1..=MAX_WORDS);
    let mut msg = lipsum::lipsum_words_with_rng(&mut *rng, words);
    if msg.chars().count() > MAX_MESSAGE_CHARS {
        msg = msg.chars().take(MAX_MESSAGE_CHARS).collect();
    }
    msg
}

fn main() {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    // Top-level comments, with ids 1..=NUM_TOP_LEVEL
    let mut parents = Vec::with_capacity(NUM_TOP_LEVEL);
    gen_n_items(COMMENTS_TABLE, NUM_TOP_LEVEL, |i| {
        let id = i as i64 + 1;
        let created_at = now - Duration::minutes(rng.gen_range(0..MAX_AGE_DAYS * 24 * 60));
        parents.push((id, created_at));
        let message = gen_message(&mut rng);
        assert!(validate_message(&message).is_ok(), "generated invalid message");
        let image_url = match rng.gen_bool(IMAGE_RATIO) {
            true => sql_str(&format!("{IMAGE_BASE_URL}/{id}/640/480")),
            false => String::from("NULL"),
        };
        format!(
            "({id}, '{}', {}, {image_url}, NULL, {})",
            created_at.to_rfc3339(),
            sql_str(&message),
            rng.gen_range(0..=MAX_LIKES),
        )
    });

    // Replies, always created after their parent and never replied to
    gen_n_items(COMMENTS_TABLE, NUM_REPLIES, |i| {
        let id = (NUM_TOP_LEVEL + i) as i64 + 1;
        let (parent, parent_time) = parents[rng.gen_range(0..parents.len())];
        let max_delay = (now - parent_time).num_seconds().max(1);
        let created_at = parent_time + Duration::seconds(rng.gen_range(1..=max_delay));
        let message = gen_message(&mut rng);
        format!(
            "({id}, '{}', {}, NULL, {parent}, {})",
            created_at.to_rfc3339(),
            sql_str(&message),
            rng.gen_range(0..=MAX_LIKES / 5),
        )
    });

    // Keep the identity sequence ahead of the inserted ids
    println!(
        "SELECT setval(pg_get_serial_sequence('{COMMENTS_TABLE}', 'id'), {});",
        NUM_TOP_LEVEL + NUM_REPLIES
    );
}
