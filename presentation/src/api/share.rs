use domain_shared::invitation::Slug;
use url::Url;

/// Public page of an invitation, the target of the share link and QR code.
pub fn share_url(base_url: &Url, slug: &Slug) -> Url {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["i", slug.0.as_str()]);
    }
    url
}
