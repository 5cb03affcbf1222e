// Bookmarky state managers
// Managers handle stateful operations over the article collection.

pub mod article_store;
