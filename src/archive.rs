use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::article::Article;

/// Articles sharing one date, in the order they were given.
#[derive(PartialEq, Eq, Debug)]
pub struct DateGroup<'a> {
    pub date: &'a str,
    pub articles: Vec<&'a Article>,
}

/// Newest first. Filenames start with the date, so this also fixes the order
/// within a day.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.filename.cmp(&a.filename));
}

pub fn group_by_date(articles: &[Article]) -> Vec<DateGroup<'_>> {
    let mut by_date = BTreeMap::<&str, Vec<&Article>>::new();
    for a in articles {
        by_date.entry(a.date.as_str()).or_default().push(a);
    }
    by_date
        .into_iter()
        .rev()
        .map(|(date, articles)| DateGroup { date, articles })
        .collect()
}

pub fn page_count(articles: usize, page_size: usize) -> usize {
    articles.div_ceil(page_size)
}

/// One archive page. `number` is 1-based.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub number: usize,
    pub total: usize,
    pub articles: &'a [Article],
}

fn page_url(number: usize) -> String {
    if number == 1 {
        "/".to_string()
    } else {
        format!("/archives/{}/", number)
    }
}

impl Page<'_> {
    pub fn url(&self) -> String {
        page_url(self.number)
    }

    pub fn prev_url(&self) -> Option<String> {
        (self.number > 1).then(|| page_url(self.number - 1))
    }

    pub fn next_url(&self) -> Option<String> {
        (self.number < self.total).then(|| page_url(self.number + 1))
    }

    pub fn output_path(&self, out_dir: &Path) -> PathBuf {
        if self.number == 1 {
            out_dir.join("index.html")
        } else {
            out_dir
                .join("archives")
                .join(self.number.to_string())
                .join("index.html")
        }
    }

    pub fn groups(&self) -> Vec<DateGroup<'_>> {
        group_by_date(self.articles)
    }
}

/// Splits `articles` into pages of at most `page_size`. `page_size` must not be 0.
pub fn paginate(articles: &[Article], page_size: usize) -> impl Iterator<Item = Page<'_>> {
    let total = page_count(articles.len(), page_size);
    articles
        .chunks(page_size)
        .enumerate()
        .map(move |(i, articles)| Page {
            number: i + 1,
            total,
            articles,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(filename: &str) -> Article {
        Article::from_filename(filename).unwrap()
    }

    fn articles(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| article(&format!("2024-01-{:02}-post{}.html", i % 28 + 1, i)))
            .collect()
    }

    fn page(number: usize, total: usize) -> Page<'static> {
        Page {
            number,
            total,
            articles: &[],
        }
    }

    #[test]
    fn sort_newest_first_test() {
        let mut list = vec![
            article("2023-05-01-b.html"),
            article("2024-01-01-a.html"),
            article("2023-05-01-c.html"),
            article("2022-12-31-z.html"),
        ];
        sort_newest_first(&mut list);
        let names: Vec<_> = list.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(
            names,
            [
                "2024-01-01-a.html",
                "2023-05-01-c.html",
                "2023-05-01-b.html",
                "2022-12-31-z.html",
            ]
        );
    }

    #[test]
    fn group_by_date_test() {
        let list = vec![
            article("2023-05-01-c.html"),
            article("2024-01-01-a.html"),
            article("2023-05-01-b.html"),
        ];
        let groups = group_by_date(&list);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-01-01");
        assert_eq!(groups[0].articles, [&list[1]]);
        assert_eq!(groups[1].date, "2023-05-01");
        // Arrival order is kept within a date.
        assert_eq!(groups[1].articles, [&list[0], &list[2]]);

        assert!(group_by_date(&[]).is_empty());
    }

    #[test]
    fn page_count_test() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn paginate_test() {
        let list = articles(25);
        let pages: Vec<_> = paginate(&list, 10).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(
            pages.iter().map(|p| p.articles.len()).collect::<Vec<_>>(),
            [10, 10, 5]
        );
        assert_eq!(pages[0].articles, &list[0..10]);
        assert_eq!(pages[2].articles, &list[20..25]);
        assert!(pages.iter().all(|p| p.total == 3));
        assert_eq!(
            pages.iter().map(|p| p.number).collect::<Vec<_>>(),
            [1, 2, 3]
        );

        assert_eq!(paginate(&[], 10).count(), 0);
    }

    #[test]
    fn page_links_test() {
        assert_eq!(page(1, 3).prev_url(), None);
        assert_eq!(page(1, 3).next_url().as_deref(), Some("/archives/2/"));
        assert_eq!(page(2, 3).prev_url().as_deref(), Some("/"));
        assert_eq!(page(2, 3).next_url().as_deref(), Some("/archives/3/"));
        assert_eq!(page(3, 3).prev_url().as_deref(), Some("/archives/2/"));
        assert_eq!(page(3, 3).next_url(), None);

        assert_eq!(page(1, 1).prev_url(), None);
        assert_eq!(page(1, 1).next_url(), None);
    }

    #[test]
    fn page_location_test() {
        let out = Path::new("dist");
        assert_eq!(page(1, 3).url(), "/");
        assert_eq!(page(3, 3).url(), "/archives/3/");
        assert_eq!(page(1, 3).output_path(out), Path::new("dist/index.html"));
        assert_eq!(
            page(2, 3).output_path(out),
            Path::new("dist/archives/2/index.html")
        );
    }
}
