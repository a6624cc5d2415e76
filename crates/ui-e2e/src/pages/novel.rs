// Novel-reading site (drxsw.com)
//
// Third-party markup we do not control: most of these locators are optional
// on any given day, and the smoke suite guards them with is_visible_now().

use crate::scope::Scope;
use playwright_rs::Locator;

/// Site name expected in the document title
pub const SITE_TITLE_PATTERN: &str = "冬日小说网";

/// Pagination "next page" label
pub const NEXT_PAGE_LABEL: &str = "下一页";

/// Chapter navigation labels
pub const PREV_CHAPTER_LABEL: &str = "上一章";
pub const NEXT_CHAPTER_LABEL: &str = "下一章";

/// Reading history link label
pub const HISTORY_LABEL: &str = "阅读历史";

/// Advanced search link/button label
pub const ADVANCED_SEARCH_LABEL: &str = "高级搜索";

/// Locators on the novel site, valid on every page of it.
#[derive(Clone)]
pub struct NovelSitePage {
    pub body: Locator,
    pub main_content: Locator,
    pub novel_list: Locator,
    pub novel_items: Locator,
    /// Link of the first novel in the list
    pub first_novel_link: Locator,
    pub search_input: Locator,
    pub links: Locator,
    pub content_sections: Locator,
    /// Paragraphs and headings
    pub text_blocks: Locator,
    pub pagination: Locator,
    pub pagination_links: Locator,
    pub next_page: Locator,
    pub novel_info: Locator,
    pub chapter_list: Locator,
    pub chapter_links: Locator,
    pub chapter_content: Locator,
    pub prev_chapter: Locator,
    pub next_chapter: Locator,
    pub category_links: Locator,
    pub category_title: Locator,
    pub bookmark_button: Locator,
    pub history_link: Locator,
    pub advanced_search: Locator,
    pub search_form: Locator,
    pub category_select: Locator,
    pub author_input: Locator,
    pub status_select: Locator,
    pub menu_button: Locator,
    pub mobile_menu: Locator,
    pub mobile_menu_links: Locator,
    pub lazy_images: Locator,
}

impl NovelSitePage {
    pub async fn new(scope: &impl Scope) -> Self {
        let novel_list = scope.locate(".novel-list").await;
        let pagination = scope.locate(".pagination").await;
        let chapter_list = scope.locate(".chapter-list").await;
        let mobile_menu = scope.locate(".mobile-menu, .nav-menu").await;

        Self {
            body: scope.locate("body").await,
            main_content: scope.locate(".main").await,
            novel_items: novel_list.locate(".novel-item").await,
            novel_list,
            first_novel_link: scope.locate(".novel-item a").await.first(),
            search_input: scope.locate(r#"input[type="text"]"#).await,
            links: scope.locate("a").await,
            content_sections: scope.locate(".content").await,
            text_blocks: scope.locate("p, h1, h2, h3, h4, h5, h6").await,
            pagination_links: pagination.locate("a").await,
            next_page: pagination.locate(&link_with_text(NEXT_PAGE_LABEL)).await,
            pagination,
            novel_info: scope.locate(".novel-info").await,
            chapter_links: chapter_list.locate("a").await,
            chapter_list,
            chapter_content: scope.locate(".chapter-content").await,
            prev_chapter: scope.locate(&link_with_text(PREV_CHAPTER_LABEL)).await,
            next_chapter: scope.locate(&link_with_text(NEXT_CHAPTER_LABEL)).await,
            category_links: scope.locate(".category-list a, .nav-category a").await,
            category_title: scope.locate(".category-title, h1").await,
            bookmark_button: scope.locate(".bookmark-btn, .favorite-btn").await,
            history_link: scope.locate(&link_with_text(HISTORY_LABEL)).await,
            advanced_search: scope
                .locate(&format!(
                    r#"a:has-text("{label}"), button:has-text("{label}")"#,
                    label = ADVANCED_SEARCH_LABEL
                ))
                .await,
            search_form: scope.locate("form").await,
            category_select: scope.locate(r#"select[name="category"]"#).await,
            author_input: scope.locate(r#"input[name="author"]"#).await,
            status_select: scope.locate(r#"select[name="status"]"#).await,
            menu_button: scope.locate(".menu-btn, .mobile-menu-btn").await,
            mobile_menu_links: mobile_menu.locate("a").await,
            mobile_menu,
            lazy_images: scope.locate(r#"img[loading="lazy"]"#).await,
        }
    }
}

fn link_with_text(text: &str) -> String {
    format!(r#"a:has-text("{}")"#, text)
}
