// Bookmarky services
// Pure computations over the article collection: querying, statistics, tag counts.

pub mod article_query;
