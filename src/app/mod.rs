pub mod patterns;

use crate::core::module::GreetingModule;
use crate::core::{GreetingScene, Pattern, PersonSource, RenderSurface, Result, SettingsProvider};
use patterns::mvc::GreetingViewController;
use patterns::mvp::MvpScene;
use patterns::mvvm::BoundLabelView;
use std::rc::Rc;

/// Assembles the scene for the configured pattern.
///
/// VIPER keeps the source and asks it on every tap. The other patterns hold
/// their model from the start, so the person is fetched once here and a data
/// error surfaces as `Err`.
pub fn build_scene<C: SettingsProvider>(
    settings: &C,
    source: Box<dyn PersonSource>,
    surface: Rc<dyn RenderSurface>,
) -> Result<Box<dyn GreetingScene>> {
    let pattern = settings.pattern();
    tracing::debug!("assembling {} scene", pattern);

    let word = settings.greeting_word();
    let placeholder = settings.placeholder();

    let scene: Box<dyn GreetingScene> = match pattern {
        Pattern::Viper => Box::new(GreetingModule::build(settings, source, surface)),
        Pattern::Mvp => Box::new(MvpScene::build(
            source.fetch_person()?,
            word,
            placeholder,
            surface,
        )),
        Pattern::Mvvm => Box::new(BoundLabelView::build(
            source.fetch_person()?,
            word,
            placeholder,
            surface,
        )),
        Pattern::Mvc => Box::new(GreetingViewController::new(
            source.fetch_person()?,
            word,
            placeholder,
            surface,
        )),
    };
    Ok(scene)
}
