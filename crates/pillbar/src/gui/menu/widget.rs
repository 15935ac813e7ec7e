use super::model::MenuState;
use super::{view, MENU_HEIGHT};
use crate::gui::theme::ThemeColors;
use glide::{Config, MenuControl, Point};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything needed to (re)build the control: the immutable behavior
/// config, the item labels, and the label font size used for measurement.
#[derive(Debug, Clone)]
pub struct MenuInit {
    pub config: Config,
    pub items: Vec<String>,
    pub label_size: f64,
}

#[derive(Debug)]
pub enum MenuMsg {
    Tap(f64, f64),
    DragTo(f64),
    DragEnd,
    SetValue(f64),
    Select(usize),
    /// Move the settled selection by a signed number of items.
    Step(i64),
    SetItems(Vec<String>),
    Reconfigure(Box<MenuInit>),
    Tick(i64),
    Resized,
}

/// The two selection signals stay separate: `ValueChanged` fires for every
/// value mutation including programmatic ones, `Tapped` only when the user
/// tapped a label.
#[derive(Debug, Clone, Copy)]
pub enum MenuOutput {
    ValueChanged(f64),
    Tapped(usize),
}

pub struct MenuBar {
    state: Rc<RefCell<MenuState>>,
    drawing_area: gtk::DrawingArea,
}

#[relm4::component(pub)]
impl SimpleComponent for MenuBar {
    type Init = MenuInit;
    type Input = MenuMsg;
    type Output = MenuOutput;

    view! {
        #[root]
        #[name = "drawing_area"]
        gtk::DrawingArea {
            set_hexpand: true,
            set_vexpand: true,
            set_content_height: MENU_HEIGHT,
            add_css_class: "pillbar-menu",

            add_controller = gtk::GestureClick {
                connect_released[sender] => move |_, _, x, y| {
                    sender.input(MenuMsg::Tap(x, y));
                }
            },

            add_controller = gtk::GestureDrag {
                connect_drag_update[sender] => move |gesture, offset_x, _| {
                    if let Some((start_x, _)) = gesture.start_point() {
                        sender.input(MenuMsg::DragTo(start_x + offset_x));
                    }
                },
                connect_drag_end[sender] => move |_, _, _| {
                    sender.input(MenuMsg::DragEnd);
                }
            },

            connect_resize[sender] => move |_, _, _| {
                sender.input(MenuMsg::Resized);
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let control = MenuControl::new(init.config, init.items);
        let state = Rc::new(RefCell::new(MenuState::new(control, init.label_size)));

        let model = MenuBar {
            state: state.clone(),
            drawing_area: root.clone(),
        };

        let widgets = view_output!();

        let state_draw = state.clone();
        root.set_draw_func(move |area, cr, width, height| {
            let style_context = area.style_context();
            let colors = ThemeColors::from_context(&style_context);
            let mut state = state_draw.borrow_mut();
            state.ensure_layout(cr, width as f64, height as f64);
            if let Err(e) = view::draw(cr, &state, &colors) {
                log::error!("Drawing error: {}", e);
            }
        });

        let tick_sender = sender.clone();
        root.add_tick_callback(move |_, clock| {
            tick_sender.input(MenuMsg::Tick(clock.frame_time()));
            glib::ControlFlow::Continue
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            MenuMsg::Tick(frame_time) => {
                let animating = self
                    .state
                    .borrow_mut()
                    .tick(frame_time as f64 / 1_000_000.0);
                if animating {
                    self.drawing_area.queue_draw();
                }
            }
            MenuMsg::Tap(x, y) => {
                let mut state = self.state.borrow_mut();
                let point = state.to_content(Point::new(x, y));
                if let Some((index, change)) = state.control.tap(point) {
                    let value = state.control.value();
                    let feedback = state.apply(change);
                    drop(state);
                    self.present(feedback);
                    let _ = sender.output(MenuOutput::ValueChanged(value));
                    let _ = sender.output(MenuOutput::Tapped(index));
                }
            }
            MenuMsg::DragTo(x) => {
                let mut state = self.state.borrow_mut();
                let value = state.control.value_for_x(state.to_content_x(x));
                let change = state.control.set_value(value);
                let feedback = state.apply(change);
                drop(state);
                self.present(feedback);
                let _ = sender.output(MenuOutput::ValueChanged(value));
            }
            MenuMsg::DragEnd => {
                let mut state = self.state.borrow_mut();
                let change = state.control.settle();
                let value = state.control.value();
                let feedback = state.apply(change);
                drop(state);
                self.present(feedback);
                let _ = sender.output(MenuOutput::ValueChanged(value));
            }
            MenuMsg::SetValue(value) => self.drive(value, &sender),
            MenuMsg::Select(index) => self.drive(index as f64, &sender),
            MenuMsg::Step(delta) => {
                let target = {
                    let state = self.state.borrow();
                    let count = state.control.items().len();
                    if count == 0 {
                        return;
                    }
                    let settled = state.control.value().round() as i64;
                    (settled + delta).clamp(0, count as i64 - 1)
                };
                self.drive(target as f64, &sender);
            }
            MenuMsg::SetItems(items) => {
                let mut state = self.state.borrow_mut();
                let change = state.control.set_items(items);
                let feedback = state.apply(change);
                state.invalidate_layout();
                drop(state);
                self.present(feedback);
                let _ = sender.output(MenuOutput::ValueChanged(0.0));
            }
            MenuMsg::Reconfigure(init) => {
                let control = MenuControl::new(init.config, init.items);
                self.state
                    .borrow_mut()
                    .replace_control(control, init.label_size);
                self.drawing_area.queue_draw();
            }
            MenuMsg::Resized => {
                self.state.borrow_mut().invalidate_layout();
                self.drawing_area.queue_draw();
            }
        }
    }
}

impl MenuBar {
    fn drive(&self, value: f64, sender: &ComponentSender<Self>) {
        let feedback = {
            let mut state = self.state.borrow_mut();
            let change = state.control.set_value(value);
            state.apply(change)
        };
        self.present(feedback);
        let _ = sender.output(MenuOutput::ValueChanged(value));
    }

    /// Queues a redraw and plays the platform feedback pulse when asked to.
    fn present(&self, feedback: bool) {
        if feedback && let Some(display) = gdk4::Display::default() {
            display.beep();
        }
        self.drawing_area.queue_draw();
    }
}
