use crate::config::{self, AppConfig};
use crate::events::AppEvent;
use crate::gui::menu::{MenuBar, MenuInit, MenuMsg, MenuOutput};
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

pub struct AppModel {
    menu: Controller<MenuBar>,
}

#[derive(Debug)]
pub enum AppMsg {
    Menu(MenuOutput),
    Step(i64),
    Event(AppEvent),
}

fn menu_init(config: &AppConfig) -> MenuInit {
    MenuInit {
        config: config.control_config(),
        items: config.items.clone(),
        label_size: config.menu.label_size,
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (AppConfig, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Pillbar"),
            set_default_size: (520, 48),
            add_css_class: "pillbar-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Left {
                        sender.input(AppMsg::Step(-1));
                        return glib::Propagation::Stop;
                    }
                    if key == gtk::gdk::Key::Right {
                        sender.input(AppMsg::Step(1));
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            set_child: Some(model.menu.widget()),
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (app_config, rx) = init;

        theme::load_css();

        let menu = MenuBar::builder()
            .launch(menu_init(&app_config))
            .forward(sender.input_sender(), AppMsg::Menu);

        let model = AppModel { menu };
        let widgets = view_output!();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::Event(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Menu(MenuOutput::ValueChanged(value)) => {
                log::debug!("Selection value changed to {:.2}", value);
            }
            AppMsg::Menu(MenuOutput::Tapped(index)) => {
                log::info!("Item {} tapped", index);
            }
            AppMsg::Step(delta) => self.menu.emit(MenuMsg::Step(delta)),
            AppMsg::Event(AppEvent::Select(index)) => self.menu.emit(MenuMsg::Select(index)),
            AppMsg::Event(AppEvent::SetValue(value)) => self.menu.emit(MenuMsg::SetValue(value)),
            AppMsg::Event(AppEvent::SetItems(items)) => self.menu.emit(MenuMsg::SetItems(items)),
            AppMsg::Event(AppEvent::ConfigReload) => match config::load_config() {
                Ok(new_config) => {
                    self.menu
                        .emit(MenuMsg::Reconfigure(Box::new(menu_init(&new_config))));
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
