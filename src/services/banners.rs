//! Banner carousel data and click resolution.
//!
//! Nothing here fails towards the shopper: repository errors are logged and
//! turned into an empty carousel or into the next fallback destination.

use crate::domain::banner::Banner;
use crate::domain::navigation::BannerTarget;
use crate::domain::types::BannerId;
use crate::dto::banners::{BannerCarousel, BannerDto};
use crate::repository::{BannerReader, CategoryReader};

/// One attempt at resolving a click. `None` hands over to the next step.
type ClickStep<R> = fn(&Banner, &R) -> Option<BannerTarget>;

/// Fetch active banners once and build the carousel state.
///
/// A failed read yields [`BannerCarousel::Empty`], the same outcome as a store
/// without active banners.
pub fn load_carousel<R>(repo: &R) -> BannerCarousel
where
    R: BannerReader,
{
    match repo.list_active_banners() {
        Ok(banners) => BannerCarousel::from_banners(banners),
        Err(e) => {
            log::error!("Error fetching banners: {e}");
            BannerCarousel::Empty
        }
    }
}

/// Active banners in display order for the JSON API.
pub fn list_active_banners<R>(repo: &R) -> Vec<BannerDto>
where
    R: BannerReader,
{
    match repo.list_active_banners() {
        Ok(banners) => banners.into_iter().map(BannerDto::from).collect(),
        Err(e) => {
            log::error!("Error fetching banners: {e}");
            vec![]
        }
    }
}

/// Resolve the destination of a clicked banner.
///
/// Steps run strictly in order and the first one producing a target wins:
/// the category listing, then the external link. A banner with neither
/// resolves to [`BannerTarget::None`].
pub fn resolve_banner_target<R>(banner: &Banner, repo: &R) -> BannerTarget
where
    R: CategoryReader,
{
    let steps: [ClickStep<R>; 2] = [category_listing_step::<R>, external_link_step::<R>];

    steps
        .iter()
        .find_map(|step| step(banner, repo))
        .unwrap_or(BannerTarget::None)
}

/// Load a banner by id and resolve its destination.
///
/// Unknown ids and failed lookups resolve to [`BannerTarget::None`].
pub fn click_banner<R>(banner_id: i32, repo: &R) -> BannerTarget
where
    R: BannerReader + CategoryReader,
{
    let banner_id = match BannerId::new(banner_id) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Ignoring click on invalid banner id: {e}");
            return BannerTarget::None;
        }
    };

    match repo.get_banner_by_id(banner_id) {
        Ok(Some(banner)) => resolve_banner_target(&banner, repo),
        Ok(None) => {
            log::warn!("Clicked banner {banner_id} does not exist");
            BannerTarget::None
        }
        Err(e) => {
            log::error!("Error fetching banner {banner_id}: {e}");
            BannerTarget::None
        }
    }
}

fn category_listing_step<R>(banner: &Banner, repo: &R) -> Option<BannerTarget>
where
    R: CategoryReader,
{
    let category_id = banner.category_id?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Some(BannerTarget::category_listing(&category.slug)),
        Ok(None) => {
            log::error!(
                "Error fetching category: category {category_id} of banner {} not found",
                banner.id
            );
            None
        }
        Err(e) => {
            log::error!("Error fetching category {category_id}: {e}");
            None
        }
    }
}

fn external_link_step<R>(banner: &Banner, _repo: &R) -> Option<BannerTarget> {
    banner.link_url.as_ref().map(BannerTarget::external)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;
    use crate::repository::test::fixtures::{
        banner, category, inactive, with_category, with_link,
    };

    #[test]
    fn carousel_shows_only_active_banners_in_order() {
        let repo = TestRepository::new(
            vec![
                banner(1, 5),
                inactive(banner(2, 0)),
                banner(3, -1),
                banner(4, 2),
            ],
            vec![],
        );

        let carousel = load_carousel(&repo);

        let ids: Vec<i32> = carousel.slides().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 4, 1]);
    }

    #[test]
    fn carousel_without_active_banners_is_empty() {
        let repo = TestRepository::new(vec![inactive(banner(1, 0))], vec![]);

        assert_eq!(load_carousel(&repo), BannerCarousel::Empty);
    }

    #[test]
    fn failed_listing_degrades_to_empty_carousel() {
        let repo = TestRepository::new(vec![banner(1, 0)], vec![]).failing_banner_reads();

        assert_eq!(load_carousel(&repo), BannerCarousel::Empty);
        assert!(list_active_banners(&repo).is_empty());
    }

    #[test]
    fn repeated_loads_keep_the_same_order() {
        let repo = TestRepository::new(
            vec![banner(7, 1), banner(2, 1), banner(5, 0), banner(9, 1)],
            vec![],
        );

        let first = load_carousel(&repo);
        let second = load_carousel(&repo);

        assert_eq!(first, second);
        let ids: Vec<i32> = first.slides().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![5, 2, 7, 9]);
    }

    #[test]
    fn category_banner_navigates_to_listing() {
        let repo = TestRepository::new(vec![], vec![category(3, "smartphones")]);
        let banner = with_category(banner(1, 0), 3);

        assert_eq!(
            resolve_banner_target(&banner, &repo),
            BannerTarget::Navigate {
                path: "/produtos?categoria=smartphones".to_string()
            }
        );
    }

    #[test]
    fn category_wins_over_link() {
        let repo = TestRepository::new(vec![], vec![category(3, "smartphones")]);
        let banner = with_link(with_category(banner(1, 0), 3), "https://example.com/promo");

        assert_eq!(
            resolve_banner_target(&banner, &repo),
            BannerTarget::category_listing(&repo.categories()[0].slug)
        );
    }

    #[test]
    fn failed_category_lookup_falls_back_to_link() {
        let repo = TestRepository::new(vec![], vec![category(3, "smartphones")])
            .failing_category_reads();
        let banner = with_link(with_category(banner(1, 0), 3), "https://example.com/promo");

        assert_eq!(
            resolve_banner_target(&banner, &repo),
            BannerTarget::Open {
                url: "https://example.com/promo".to_string()
            }
        );
        assert_eq!(repo.category_lookups(), 1);
    }

    #[test]
    fn missing_category_falls_back_to_link() {
        let repo = TestRepository::new(vec![], vec![]);
        let banner = with_link(with_category(banner(1, 0), 42), "https://example.com/promo");

        assert_eq!(
            resolve_banner_target(&banner, &repo),
            BannerTarget::Open {
                url: "https://example.com/promo".to_string()
            }
        );
    }

    #[test]
    fn missing_category_without_link_does_nothing() {
        let repo = TestRepository::new(vec![], vec![]);
        let banner = with_category(banner(1, 0), 42);

        assert!(resolve_banner_target(&banner, &repo).is_none());
    }

    #[test]
    fn plain_banner_does_nothing() {
        let repo = TestRepository::new(vec![], vec![category(3, "smartphones")]);

        assert_eq!(
            resolve_banner_target(&banner(1, 0), &repo),
            BannerTarget::None
        );
        assert_eq!(repo.category_lookups(), 0);
    }

    #[test]
    fn link_only_banner_opens_link() {
        let repo = TestRepository::new(vec![], vec![]);
        let banner = with_link(banner(1, 0), "https://example.com/promo");

        assert_eq!(
            resolve_banner_target(&banner, &repo),
            BannerTarget::Open {
                url: "https://example.com/promo".to_string()
            }
        );
        assert_eq!(repo.category_lookups(), 0);
    }

    #[test]
    fn click_on_stored_banner_resolves_it() {
        let repo = TestRepository::new(
            vec![with_category(banner(1, 0), 3)],
            vec![category(3, "notebooks")],
        );

        assert_eq!(
            click_banner(1, &repo),
            BannerTarget::Navigate {
                path: "/produtos?categoria=notebooks".to_string()
            }
        );
    }

    #[test]
    fn click_on_unknown_or_invalid_banner_does_nothing() {
        let repo = TestRepository::new(vec![banner(1, 0)], vec![]);

        assert!(click_banner(99, &repo).is_none());
        assert!(click_banner(0, &repo).is_none());
    }

    #[test]
    fn click_with_failing_store_does_nothing() {
        let repo = TestRepository::new(vec![banner(1, 0)], vec![]).failing_banner_reads();

        assert!(click_banner(1, &repo).is_none());
    }
}
