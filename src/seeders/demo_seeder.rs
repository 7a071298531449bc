use crate::config::AppState;
use crate::repositories::like_repository::LikeRepository;
use crate::repositories::media_repository::MediaRepository;
use crate::repositories::tweet_repository::TweetRepository;
use crate::repositories::user_repository::UserRepository;

/// Populates an empty database with a handful of demo users, tweets, media
/// records and likes. Runs once: the presence of the `test` user is the guard.
pub async fn seed_demo_data(state: &AppState) -> Result<(), String> {
    let db = &state.db;

    if UserRepository::exists(db, "test")
        .await
        .map_err(|e| e.to_string())?
    {
        println!("ℹ️  Demo data already present, skipping.");
        return Ok(());
    }

    println!("🚀 Creating Demo Users...");
    let _test = UserRepository::register(db, "test")
        .await
        .map_err(|e| e.to_string())?;
    let alex = UserRepository::register(db, "Alex")
        .await
        .map_err(|e| e.to_string())?;
    let petr = UserRepository::register(db, "Petr")
        .await
        .map_err(|e| e.to_string())?;
    let amigo = UserRepository::register(db, "Amigo")
        .await
        .map_err(|e| e.to_string())?;
    let nikole = UserRepository::register(db, "Nikole")
        .await
        .map_err(|e| e.to_string())?;

    let edges = [
        (alex.id, petr.id),
        (alex.id, amigo.id),
        (nikole.id, alex.id),
        (amigo.id, alex.id),
        (amigo.id, petr.id),
        (nikole.id, amigo.id),
        (nikole.id, petr.id),
    ];
    for (follower_id, followed_id) in edges {
        UserRepository::follow(db, follower_id, followed_id)
            .await
            .map_err(|e| e.to_string())?;
    }

    let champions_1 = MediaRepository::add(db, &alex.name, "champions_1.png")
        .await
        .map_err(|e| e.to_string())?;
    let champions_2 = MediaRepository::add(db, &alex.name, "champions_2.png")
        .await
        .map_err(|e| e.to_string())?;
    let good_morning = MediaRepository::add(db, &alex.name, "good_morning.jpg")
        .await
        .map_err(|e| e.to_string())?;
    let sun_rise = MediaRepository::add(db, &petr.name, "sun_rise.jpg")
        .await
        .map_err(|e| e.to_string())?;
    let vacation = MediaRepository::add(db, &nikole.name, "vacation.jpg")
        .await
        .map_err(|e| e.to_string())?;

    let hala_madrid = TweetRepository::add(
        db,
        &alex.name,
        "!!!Hala Madrid!!!".to_owned(),
        Some(vec![champions_1, champions_2]),
    )
    .await
    .map_err(|e| e.to_string())?;
    let morning = TweetRepository::add(
        db,
        &alex.name,
        "Good morning=))".to_owned(),
        Some(vec![good_morning]),
    )
    .await
    .map_err(|e| e.to_string())?;
    let nice_day = TweetRepository::add(
        db,
        &petr.name,
        "Today is a nice day!".to_owned(),
        Some(vec![sun_rise]),
    )
    .await
    .map_err(|e| e.to_string())?;
    let vacation_tweet = TweetRepository::add(
        db,
        &nikole.name,
        "Awaited vacation after hard working year...".to_owned(),
        Some(vec![vacation]),
    )
    .await
    .map_err(|e| e.to_string())?;
    TweetRepository::add(db, &nikole.name, "Again raining)".to_owned(), None)
        .await
        .map_err(|e| e.to_string())?;

    let likes = [
        (hala_madrid, &nikole.name),
        (morning, &nikole.name),
        (morning, &amigo.name),
        (nice_day, &nikole.name),
        (nice_day, &amigo.name),
        (nice_day, &alex.name),
        (vacation_tweet, &nikole.name),
        (vacation_tweet, &alex.name),
    ];
    for (tweet_id, user_name) in likes {
        LikeRepository::like(db, user_name, tweet_id)
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
