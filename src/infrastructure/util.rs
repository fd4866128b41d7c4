use crate::application::ports::util::SlugGenerator;

/// Unicode-aware slugs via the `slug` crate (`"Hello, Wörld!"` -> `"hello-world"`).
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
