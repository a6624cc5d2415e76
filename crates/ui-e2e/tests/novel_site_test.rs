// Smoke tests for the novel-reading site
//
// Optional features are guarded with is_visible_now(): when a feature is not
// on the page the check is skipped, not failed. The local replica has all of
// them, so here every guarded branch runs.

mod common;

use playwright_rs::{Page, SelectOption, Viewport, expect};
use std::time::{Duration, Instant};
use test_server::TestServer;
use ui_e2e::pages::novel::SITE_TITLE_PATTERN;
use ui_e2e::actions::{is_visible_now, wait_for_timeout};
use ui_e2e::{
    Actions, Error, Fixture, NovelSitePage, Session, Settings, expect_locator, expect_page,
};

/// Runs `body` on a session that has the novel site's entry page open.
async fn with_site<F, Fut>(settings: &Settings, body: F) -> ui_e2e::Result<()>
where
    F: FnOnce(Page, Actions, NovelSitePage) -> Fut,
    Fut: std::future::Future<Output = ui_e2e::Result<()>>,
{
    let url = settings.novel_site_url.to_string();
    Session::run(settings, Fixture::Raw, |page, actions| async move {
        page.goto(&url, None).await?;
        let site = NovelSitePage::new(&page).await;
        body(page, actions, site).await
    })
    .await
}

#[tokio::test]
async fn test_site_loads() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |page, _actions, site| async move {
        expect_page(&page).to_have_title_regex(SITE_TITLE_PATTERN).await?;
        expect(site.body).to_be_visible().await?;
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_main_content_and_novel_list() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |_page, _actions, site| async move {
        expect(site.main_content.clone()).to_be_visible().await?;

        if is_visible_now(&site.novel_list).await {
            expect_locator(&site.novel_items)
                .to_have_count_greater_than(0)
                .await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_search_submits() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |page, _actions, site| async move {
        if is_visible_now(&site.search_input).await {
            site.search_input.fill("测试小说", None).await?;
            site.search_input.press("Enter", None).await?;
            wait_for_timeout(Duration::from_secs(2)).await;

            expect(site.body.clone()).to_be_visible().await?;
            expect_page(&page).to_have_url_regex("/novel/search").await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_navigation_links() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());
    let entry_url = settings.novel_site_url.to_string();

    with_site(&settings, |page, actions, site| async move {
        let count = site.links.count().await?;
        assert!(count > 0, "expected links on the entry page");

        for i in 0..count.min(3) {
            let link = site.links.nth(i as i32);
            let href = link.get_attribute("href").await?;
            let Some(href) = href.filter(|h| !h.starts_with("javascript:")) else {
                continue;
            };
            tracing::debug!(href = %href, "follow link");

            link.click(None).await?;
            wait_for_timeout(Duration::from_secs(1)).await;
            expect(site.body.clone()).to_be_visible().await?;

            actions.go_back().await?;
            // Read once, no retry: go_back must not return before the entry page is back
            let current = page
                .evaluate::<(), String>("window.location.href", None)
                .await?;
            assert_eq!(current, entry_url);
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_go_back_returns_with_previous_page_loaded() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |_page, actions, site| async move {
        site.first_novel_link.click(None).await?;
        expect(site.novel_info.clone()).to_be_visible().await?;
        assert!(!is_visible_now(&site.novel_list).await);

        actions.go_back().await?;
        // Checked without waiting: the list exists only on the entry page
        assert!(is_visible_now(&site.novel_list).await);
        assert_eq!(site.novel_info.count().await?, 0);
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_go_back_without_history_times_out() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings =
        common::local_settings(&server.url()).with_action_timeout(Duration::from_millis(500));

    let result: ui_e2e::Result<()> =
        Session::run(&settings, Fixture::Raw, |_page, actions| async move {
            actions.go_back().await
        })
        .await;

    match result {
        Err(Error::HistoryTimeout { from, duration_ms }) => {
            assert_eq!(from, "about:blank");
            assert_eq!(duration_ms, 500);
        }
        other => panic!("expected a history timeout, got {:?}", other),
    }

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_responsive_viewports() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |page, _actions, site| async move {
        for (width, height) in [(375, 667), (768, 1024), (1920, 1080)] {
            page.set_viewport_size(Viewport { width, height }).await?;
            expect(site.body.clone()).to_be_visible().await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_content_loaded() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |_page, _actions, site| async move {
        assert!(site.content_sections.count().await? > 0);
        assert!(site.text_blocks.count().await? > 0);
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_pagination() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |page, _actions, site| async move {
        if is_visible_now(&site.pagination).await {
            assert!(site.pagination_links.count().await? > 0);

            if is_visible_now(&site.next_page).await {
                site.next_page.click(None).await?;
                wait_for_timeout(Duration::from_secs(1)).await;
                expect(site.body.clone()).to_be_visible().await?;
                expect_page(&page).to_have_url_regex(r"page=2").await?;
            }
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_novel_details() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |_page, _actions, site| async move {
        if is_visible_now(&site.first_novel_link).await {
            let title = site.first_novel_link.text_content().await?;
            tracing::info!(title = ?title, "open novel");
            site.first_novel_link.click(None).await?;

            expect(site.body.clone()).to_be_visible().await?;
            expect(site.novel_info.clone()).to_be_visible().await?;
            expect(site.chapter_list.clone()).to_be_visible().await?;
            assert!(site.chapter_links.count().await? > 0);
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_category_navigation() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |_page, _actions, site| async move {
        let first = site.category_links.first();
        if is_visible_now(&first).await {
            assert!(site.category_links.count().await? > 0);

            first.click(None).await?;
            wait_for_timeout(Duration::from_secs(1)).await;

            expect(site.body.clone()).to_be_visible().await?;
            expect(site.category_title.clone()).to_be_visible().await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_chapter_reading() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |_page, _actions, site| async move {
        if !is_visible_now(&site.first_novel_link).await {
            return Ok(());
        }
        site.first_novel_link.click(None).await?;
        wait_for_timeout(Duration::from_secs(1)).await;

        let first_chapter = site.chapter_links.first();
        if is_visible_now(&first_chapter).await {
            first_chapter.click(None).await?;
            wait_for_timeout(Duration::from_secs(1)).await;

            expect(site.chapter_content.clone()).to_be_visible().await?;
            expect(site.prev_chapter.clone()).to_be_visible().await?;
            expect(site.next_chapter.clone()).to_be_visible().await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_bookmark_and_history() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |page, _actions, site| async move {
        if is_visible_now(&site.bookmark_button).await {
            expect(site.bookmark_button.clone()).to_be_visible().await?;
        }

        if is_visible_now(&site.history_link).await {
            site.history_link.click(None).await?;
            wait_for_timeout(Duration::from_secs(1)).await;
            expect(site.body.clone()).to_be_visible().await?;
            expect_page(&page).to_have_url_regex("/novel/history").await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_advanced_search_filters() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |_page, _actions, site| async move {
        if !is_visible_now(&site.advanced_search).await {
            return Ok(());
        }
        site.advanced_search.click(None).await?;
        wait_for_timeout(Duration::from_secs(1)).await;

        expect(site.search_form.clone()).to_be_visible().await?;

        if is_visible_now(&site.category_select).await {
            site.category_select
                .select_option(SelectOption::Index(1), None)
                .await?;
            expect(site.category_select.clone())
                .to_have_value("xuanhuan")
                .await?;
        }
        if is_visible_now(&site.author_input).await {
            site.author_input.fill("测试作者", None).await?;
            expect(site.author_input.clone()).to_have_value("测试作者").await?;
        }
        if is_visible_now(&site.status_select).await {
            site.status_select
                .select_option(SelectOption::Index(1), None)
                .await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_mobile_menu() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());

    with_site(&settings, |page, _actions, site| async move {
        page.set_viewport_size(Viewport {
            width: 375,
            height: 667,
        })
        .await?;

        if is_visible_now(&site.menu_button).await {
            site.menu_button.click(None).await?;
            wait_for_timeout(Duration::from_millis(500)).await;

            expect(site.mobile_menu.clone()).to_be_visible().await?;
            assert!(site.mobile_menu_links.count().await? > 0);
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_error_pages_render() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());
    let missing = settings
        .novel_site_url
        .join("nonexistent-page")
        .expect("valid relative URL")
        .to_string();

    with_site(&settings, |page, _actions, site| async move {
        page.goto(&missing, None).await?;
        expect(site.body.clone()).to_be_visible().await?;

        if is_visible_now(&site.search_input).await {
            site.search_input.fill("!@#$%^&*()", None).await?;
            site.search_input.press("Enter", None).await?;
            wait_for_timeout(Duration::from_secs(2)).await;
            expect(site.body.clone()).to_be_visible().await?;
        }
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
async fn test_load_time_and_lazy_images() -> ui_e2e::Result<()> {
    let server = TestServer::start().await;
    let settings = common::local_settings(&server.url());
    let url = settings.novel_site_url.to_string();

    with_site(&settings, |page, _actions, site| async move {
        let start = Instant::now();
        page.goto(&url, None).await?;
        let load_time = start.elapsed();
        assert!(
            load_time < Duration::from_secs(10),
            "entry page took {:?}",
            load_time
        );

        let lazy_images = site.lazy_images.count().await?;
        tracing::info!(lazy_images, "lazy-loaded images");
        Ok(())
    })
    .await?;

    server.shutdown();
    Ok(())
}
