//! Budget store
//!
//! `BudgetStore` owns the authoritative `MonthlyBudget` for the session and
//! provides the mutation surface over it. Each operation runs to completion
//! before the next is observed (single-threaded, synchronous semantics); a
//! multi-threaded host must wrap the store in one exclusive lock.
//!
//! Mutations keep the derived per-category `spent_amount` totals consistent
//! with the expense list, and never fail: removing an unknown id is a no-op
//! and an expense whose category has no matching `BudgetCategory` is still
//! recorded (category linkage is informational, not a foreign key).

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLog, EntityKind};
use crate::models::{
    BudgetCategory, CategoryId, Expense, ExpenseCategory, ExpenseId, Income, IncomeId,
    IncomeSource, Money, MonthlyBudget, SavingsGoal, SavingsGoalId,
};

/// In-memory store for one month's budgeting state
///
/// Constructed explicitly from a seed value so tests can build independent
/// instances; there is no ambient global.
#[derive(Debug, Clone)]
pub struct BudgetStore {
    budget: MonthlyBudget,
    audit: AuditLog,
}

impl BudgetStore {
    /// Create a store over an initial budget supplied by a data provider
    pub fn new(budget: MonthlyBudget) -> Self {
        Self {
            budget,
            audit: AuditLog::new(),
        }
    }

    /// The current snapshot
    pub fn budget(&self) -> &MonthlyBudget {
        &self.budget
    }

    /// The session's mutation audit log
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Replace the whole aggregate (session restart)
    ///
    /// The previous snapshot is discarded wholesale; the audit log keeps
    /// running across the swap.
    pub fn replace_budget(&mut self, budget: MonthlyBudget) {
        self.budget = budget;
        self.audit.record(AuditEntry::update(
            EntityKind::Budget,
            format!("{}-{:02}", self.budget.year, self.budget.month + 1),
            None,
            Some("budget replaced".to_string()),
        ));
    }

    // === Expense operations ===

    /// Record an expense and reconcile the matching category total
    ///
    /// Assigns a fresh id. If a `BudgetCategory` with the same label exists,
    /// its `spent_amount` grows by `amount` (floored at zero, so invalid
    /// negative input cannot corrupt the total). No category match is not an
    /// error; the expense is recorded either way.
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Expense {
        let expense = Expense::new(amount, description, category, date);

        if let Some(budget_category) = self.budget.budget_category_by_name_mut(category) {
            budget_category.record_spending(amount);
        }

        self.audit.record(AuditEntry::create(
            EntityKind::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
        ));

        self.budget.expenses.push(expense.clone());
        expense
    }

    /// Remove an expense by id
    ///
    /// Idempotent: returns `false` (and changes nothing) when no expense
    /// with the id exists. On removal the matching category's
    /// `spent_amount` shrinks by the expense amount, floored at zero.
    pub fn remove_expense(&mut self, id: &ExpenseId) -> bool {
        let Some(position) = self.budget.expenses.iter().position(|e| e.id == *id) else {
            return false;
        };

        let expense = self.budget.expenses.remove(position);

        if let Some(budget_category) = self.budget.budget_category_by_name_mut(expense.category) {
            budget_category.withdraw_spending(expense.amount);
        }

        self.audit.record(AuditEntry::delete(
            EntityKind::Expense,
            expense.id.to_string(),
            Some(expense.description),
        ));

        true
    }

    // === Income operations ===

    /// Record an income entry
    ///
    /// Income carries no category linkage; the aggregate income total is
    /// computed at read time.
    pub fn add_income(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        source: IncomeSource,
        date: NaiveDate,
    ) -> Income {
        let income = Income::new(amount, description, source, date);

        self.audit.record(AuditEntry::create(
            EntityKind::Income,
            income.id.to_string(),
            Some(income.description.clone()),
        ));

        self.budget.income.push(income.clone());
        income
    }

    /// Remove an income entry by id (idempotent)
    pub fn remove_income(&mut self, id: &IncomeId) -> bool {
        let Some(position) = self.budget.income.iter().position(|i| i.id == *id) else {
            return false;
        };

        let income = self.budget.income.remove(position);

        self.audit.record(AuditEntry::delete(
            EntityKind::Income,
            income.id.to_string(),
            Some(income.description),
        ));

        true
    }

    // === Budget category operations ===

    /// Add a budget allocation for a category label
    pub fn add_budget_category(
        &mut self,
        name: ExpenseCategory,
        budgeted_amount: Money,
        spent_amount: Money,
        color: impl Into<String>,
    ) -> BudgetCategory {
        let category = BudgetCategory::new(name, budgeted_amount, spent_amount, color);

        self.audit.record(AuditEntry::create(
            EntityKind::BudgetCategory,
            category.id.to_string(),
            Some(category.name.to_string()),
        ));

        self.budget.budget_categories.push(category.clone());
        category
    }

    /// Replace the category whose id matches, wholesale
    ///
    /// No partial merge: the caller supplies the fully-formed replacement.
    /// Returns `false` when no category with the id exists.
    pub fn update_budget_category(&mut self, category: BudgetCategory) -> bool {
        let Some(slot) = self
            .budget
            .budget_categories
            .iter_mut()
            .find(|c| c.id == category.id)
        else {
            return false;
        };

        let detail = category_changes(slot, &category);
        self.audit.record(AuditEntry::update(
            EntityKind::BudgetCategory,
            category.id.to_string(),
            Some(category.name.to_string()),
            detail,
        ));

        *slot = category;
        true
    }

    /// Remove a budget category by id (idempotent)
    ///
    /// Expenses filed under the label are untouched; only the allocation
    /// disappears.
    pub fn remove_budget_category(&mut self, id: &CategoryId) -> bool {
        let Some(position) = self
            .budget
            .budget_categories
            .iter()
            .position(|c| c.id == *id)
        else {
            return false;
        };

        let category = self.budget.budget_categories.remove(position);

        self.audit.record(AuditEntry::delete(
            EntityKind::BudgetCategory,
            category.id.to_string(),
            Some(category.name.to_string()),
        ));

        true
    }

    // === Savings goal operations ===

    /// Add a savings goal
    pub fn add_savings_goal(
        &mut self,
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        deadline: Option<NaiveDate>,
        color: impl Into<String>,
    ) -> SavingsGoal {
        let goal = SavingsGoal::new(name, target_amount, current_amount, deadline, color);

        self.audit.record(AuditEntry::create(
            EntityKind::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
        ));

        self.budget.savings_goals.push(goal.clone());
        goal
    }

    /// Replace the goal whose id matches, wholesale
    pub fn update_savings_goal(&mut self, goal: SavingsGoal) -> bool {
        let Some(slot) = self
            .budget
            .savings_goals
            .iter_mut()
            .find(|g| g.id == goal.id)
        else {
            return false;
        };

        let detail = goal_changes(slot, &goal);
        self.audit.record(AuditEntry::update(
            EntityKind::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            detail,
        ));

        *slot = goal;
        true
    }

    /// Remove a savings goal by id (idempotent)
    pub fn remove_savings_goal(&mut self, id: &SavingsGoalId) -> bool {
        let Some(position) = self.budget.savings_goals.iter().position(|g| g.id == *id) else {
            return false;
        };

        let goal = self.budget.savings_goals.remove(position);

        self.audit.record(AuditEntry::delete(
            EntityKind::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name),
        ));

        true
    }
}

/// Summarize the changed fields between two category versions
fn category_changes(before: &BudgetCategory, after: &BudgetCategory) -> Option<String> {
    let mut changes = Vec::new();

    if before.name != after.name {
        changes.push(format!("name: {} -> {}", before.name, after.name));
    }
    if before.budgeted_amount != after.budgeted_amount {
        changes.push(format!(
            "budgeted_amount: {} -> {}",
            before.budgeted_amount, after.budgeted_amount
        ));
    }
    if before.spent_amount != after.spent_amount {
        changes.push(format!(
            "spent_amount: {} -> {}",
            before.spent_amount, after.spent_amount
        ));
    }
    if before.color != after.color {
        changes.push(format!("color: {} -> {}", before.color, after.color));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Summarize the changed fields between two goal versions
fn goal_changes(before: &SavingsGoal, after: &SavingsGoal) -> Option<String> {
    let mut changes = Vec::new();

    if before.name != after.name {
        changes.push(format!("name: {} -> {}", before.name, after.name));
    }
    if before.target_amount != after.target_amount {
        changes.push(format!(
            "target_amount: {} -> {}",
            before.target_amount, after.target_amount
        ));
    }
    if before.current_amount != after.current_amount {
        changes.push(format!(
            "current_amount: {} -> {}",
            before.current_amount, after.current_amount
        ));
    }
    if before.deadline != after.deadline {
        changes.push("deadline changed".to_string());
    }
    if before.color != after.color {
        changes.push(format!("color: {} -> {}", before.color, after.color));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
