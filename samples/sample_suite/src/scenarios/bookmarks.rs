use bookmark_service_client::bookmarks::{Bookmark, BookmarkClient};

pub async fn run(client: &BookmarkClient) -> Result<(), String> {
    println!("Scenario: bookmarks");

    let bookmarks = client.list().await;
    println!("Bookmarks: {}", bookmarks.len());

    let bookmark = Bookmark::new(&uuid::Uuid::new_v4().to_string(), "https://example.com");
    let response = client
        .add(&bookmark)
        .await
        .ok_or_else(|| "AddBookmark failed".to_string())?;
    println!("AddBookmark: {}", response);

    match client.get_by_id(&bookmark.id).await {
        Some(found) => println!("GetBookmarks/{}: {}", found.id, found.url),
        None => println!("GetBookmarks/{}: not found", bookmark.id),
    }

    Ok(())
}
