use crate::core::catalog::menu::{BMI_OVERRIDES, DEFAULT_MENU, MenuOverride, SYMPTOM_OVERRIDES};
use crate::core::matcher::MatchContext;
use crate::models::recommendation::DailyMenu;

/// Build today's menu: the default day, then the BMI override, then every
/// matching symptom override in table order. Later overrides win per field.
pub fn compose_menu(ctx: &MatchContext) -> DailyMenu {
    let mut menu = DEFAULT_MENU.build();
    apply_matching(BMI_OVERRIDES, ctx, &mut menu);
    apply_matching(SYMPTOM_OVERRIDES, ctx, &mut menu);
    menu
}

fn apply_matching(overrides: &[MenuOverride], ctx: &MatchContext, menu: &mut DailyMenu) {
    for rule in overrides {
        if rule.trigger.matches(ctx) {
            tracing::debug!(rule = rule.name, "menu override applied");
            rule.patch.apply(menu);
        }
    }
}
