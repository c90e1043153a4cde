//! Shared Tailwind class constants so the dashboard, authoring form and quiz
//! screens stay visually consistent.

pub struct Theme;

impl Theme {
    /// White rounded panel used for quiz cards and forms.
    pub const CARD: &'static str = "bg-white dark:bg-gray-800 rounded-xl shadow-md border border-gray-200 dark:border-gray-700";

    /// Text, number and textarea inputs.
    pub const INPUT: &'static str = "mt-1 block w-full bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-purple-500 focus:border-purple-500 p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";

    pub const LABEL: &'static str = "block text-sm font-medium text-gray-700 dark:text-gray-200";

    /// Neutral button next to a primary action.
    pub const SECONDARY_BUTTON: &'static str = "px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700";

    /// Answer option, not selected.
    pub const OPTION: &'static str = "w-full text-left p-4 rounded-lg border-2 border-gray-200 hover:border-purple-500 hover:bg-purple-50 transition-all duration-200";

    /// Answer option the user has picked for the current question.
    pub const OPTION_SELECTED: &'static str = "w-full text-left p-4 rounded-lg border-2 border-purple-500 bg-purple-50 transition-all duration-200";
}
