//! Pure permission evaluation.
//!
//! - No IO
//! - No panics
//! - No hidden state (a check is a function of its arguments only)
//!
//! Both escalation rules live in [`has_permission`] and nowhere else: the
//! bare superuser grant implies everything, and a module's `admin` action
//! implies every other action on that module.

use corehr_core::ModuleId;

use crate::{Action, Permission, PermissionContext};

/// Does the caller hold `required`?
pub fn has_permission(ctx: &PermissionContext, required: &Permission) -> bool {
    if ctx.is_superuser() || ctx.contains(required) {
        return true;
    }
    match *required {
        // Only the literal grant satisfies a superuser requirement.
        Permission::Superuser => false,
        Permission::Scoped { module, action } => {
            action != Action::Admin && ctx.contains(&Permission::scoped(module, Action::Admin))
        }
    }
}

/// May the caller perform `action` on `module`?
pub fn can_perform(ctx: &PermissionContext, module: ModuleId, action: Action) -> bool {
    has_permission(ctx, &Permission::scoped(module, action))
}

/// May the caller see the module at all?
pub fn can_access_module(ctx: &PermissionContext, module: ModuleId) -> bool {
    can_perform(ctx, module, Action::View)
}

/// May the caller enter the module's admin area?
pub fn can_access_admin(ctx: &PermissionContext, module: ModuleId) -> bool {
    can_perform(ctx, module, Action::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(perms: &[Permission]) -> PermissionContext {
        perms.iter().copied().collect()
    }

    #[test]
    fn exact_grant_is_honored() {
        let c = ctx(&[Permission::scoped(ModuleId::Leaves, Action::View)]);
        assert!(can_access_module(&c, ModuleId::Leaves));
        assert!(!can_access_module(&c, ModuleId::Payroll));
    }

    #[test]
    fn view_does_not_imply_admin() {
        let c = ctx(&[Permission::scoped(ModuleId::Employees, Action::View)]);
        assert!(can_access_module(&c, ModuleId::Employees));
        assert!(!can_access_admin(&c, ModuleId::Employees));
    }

    #[test]
    fn module_admin_implies_all_actions_on_that_module() {
        let c = ctx(&[Permission::scoped(ModuleId::Employees, Action::Admin)]);
        for action in Action::ALL {
            assert!(can_perform(&c, ModuleId::Employees, action), "{action}");
        }
        assert!(!can_perform(&c, ModuleId::Payroll, Action::View));
    }

    #[test]
    fn superuser_requirement_needs_the_literal() {
        let c = ctx(&[Permission::scoped(ModuleId::Employees, Action::Admin)]);
        assert!(!has_permission(&c, &Permission::Superuser));
        assert!(has_permission(&ctx(&[Permission::Superuser]), &Permission::Superuser));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_module() -> impl Strategy<Value = ModuleId> {
            prop::sample::select(ModuleId::ALL.to_vec())
        }

        fn arb_action() -> impl Strategy<Value = Action> {
            prop::sample::select(Action::ALL.to_vec())
        }

        fn arb_context() -> impl Strategy<Value = PermissionContext> {
            prop::collection::vec((arb_module(), arb_action()), 0..16)
                .prop_map(|pairs| pairs.into_iter().map(|(m, a)| Permission::scoped(m, a)).collect())
        }

        proptest! {
            /// Superuser passes every check on every module.
            #[test]
            fn superuser_grants_everything(module in arb_module(), action in arb_action()) {
                let c: PermissionContext = [Permission::Superuser].into_iter().collect();
                prop_assert!(can_perform(&c, module, action));
                prop_assert!(can_access_module(&c, module));
                prop_assert!(can_access_admin(&c, module));
            }

            /// The empty context denies every check.
            #[test]
            fn empty_context_denies_everything(module in arb_module(), action in arb_action()) {
                let c = PermissionContext::empty();
                prop_assert!(!can_perform(&c, module, action));
            }

            /// Evaluation is a pure function: repeated calls agree.
            #[test]
            fn evaluation_is_deterministic(c in arb_context(), module in arb_module(), action in arb_action()) {
                let first = can_perform(&c, module, action);
                prop_assert_eq!(first, can_perform(&c, module, action));
            }

            /// Granting more permissions never revokes access.
            #[test]
            fn grants_are_monotonic(
                c in arb_context(),
                extra_module in arb_module(),
                extra_action in arb_action(),
                module in arb_module(),
                action in arb_action(),
            ) {
                let wider: PermissionContext = c
                    .iter()
                    .copied()
                    .chain([Permission::scoped(extra_module, extra_action)])
                    .collect();
                prop_assert!(!can_perform(&c, module, action) || can_perform(&wider, module, action));
            }
        }
    }
}
